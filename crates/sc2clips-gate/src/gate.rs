//! Upload gate decision logic.

use crate::notice::Notice;
use crate::policy::{CooldownPolicy, CooldownState};
use crate::store::CooldownStore;
use chrono::{DateTime, Utc};
use sc2clips_common::{has_extension, ChannelId, MessageId, UserId};
use tracing::info;

/// A message seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Channel the message was posted in.
    pub channel: ChannelId,
    /// Author of the message.
    pub author: UserId,
    /// The message itself.
    pub message: MessageId,
    /// File names of the message's attachments.
    pub attachments: Vec<String>,
    /// When the gate evaluates the message.
    pub at: DateTime<Utc>,
}

/// Decision for a candidate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not in the clips channel.
    Ignore,
    /// No attachment has the replay extension.
    RejectType,
    /// The author uploaded a replay too recently.
    RejectCooldown {
        /// Whole days until the author may upload again.
        days_remaining: i64,
    },
    /// The upload is accepted and recorded.
    Accept,
}

impl Verdict {
    /// Whether the original message must be removed.
    pub const fn deletes_message(&self) -> bool {
        matches!(self, Self::RejectType | Self::RejectCooldown { .. })
    }

    /// Short label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::RejectType => "reject_type",
            Self::RejectCooldown { .. } => "reject_cooldown",
            Self::Accept => "accept",
        }
    }
}

/// Non-mutating view of a user's upload eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// The user never had an accepted upload.
    NoRecord,
    /// The user must wait.
    Active {
        /// Last accepted upload.
        last_upload: DateTime<Utc>,
        /// Whole days until the user may upload again.
        days_remaining: i64,
    },
    /// The user may upload again.
    Elapsed {
        /// Last accepted upload.
        last_upload: DateTime<Utc>,
    },
}

/// Result of an administrative reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The record existed and was deleted.
    Cleared {
        /// The deleted timestamp.
        last_upload: DateTime<Utc>,
    },
    /// The user had no record.
    NotFound,
}

/// Gate for replay uploads in the clips channel.
#[derive(Debug, Clone)]
pub struct UploadGate {
    channel: ChannelId,
    extension: String,
    policy: CooldownPolicy,
}

impl UploadGate {
    /// Creates a gate for `channel` accepting files ending in `extension`.
    pub fn new(channel: ChannelId, extension: impl Into<String>, policy: CooldownPolicy) -> Self {
        Self {
            channel,
            extension: extension.into(),
            policy,
        }
    }

    /// The gated channel.
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// The accepted extension, including the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The cooldown policy.
    pub const fn policy(&self) -> CooldownPolicy {
        self.policy
    }

    /// True when at least one attachment carries the replay extension.
    pub fn has_replay(&self, attachments: &[String]) -> bool {
        attachments
            .iter()
            .any(|name| has_extension(name, &self.extension))
    }

    /// Decides on `candidate`, recording the upload when it is accepted.
    ///
    /// The store stays locked from the cooldown read to the write, so two
    /// concurrent uploads by the same user cannot both be accepted.
    pub fn evaluate(&self, store: &CooldownStore, candidate: &Candidate) -> Verdict {
        if candidate.channel != self.channel {
            return Verdict::Ignore;
        }

        let verdict = if self.has_replay(&candidate.attachments) {
            let key = candidate.author.record_key();
            let mut records = store.lock();
            let cooldown = records
                .get(&key)
                .map(|last| self.policy.check(last, candidate.at));

            match cooldown {
                Some(CooldownState::Active { days_remaining }) => {
                    Verdict::RejectCooldown { days_remaining }
                }
                Some(CooldownState::Elapsed) | None => {
                    records.set(&key, candidate.at);
                    Verdict::Accept
                }
            }
        } else {
            Verdict::RejectType
        };

        info!(
            user = %candidate.author,
            channel = %candidate.channel,
            message = %candidate.message,
            attachments = candidate.attachments.len(),
            verdict = verdict.label(),
            "Upload evaluated"
        );

        verdict
    }

    /// Reports whether `user` may upload at `now`, without changing anything.
    pub fn status(&self, store: &CooldownStore, user: UserId, now: DateTime<Utc>) -> UploadStatus {
        match store.get(&user.record_key()) {
            None => UploadStatus::NoRecord,
            Some(last_upload) => match self.policy.check(last_upload, now) {
                CooldownState::Active { days_remaining } => UploadStatus::Active {
                    last_upload,
                    days_remaining,
                },
                CooldownState::Elapsed => UploadStatus::Elapsed { last_upload },
            },
        }
    }

    /// Clears the record of `user`, independent of any cooldown.
    pub fn reset(&self, store: &CooldownStore, user: UserId) -> ResetOutcome {
        let outcome = store
            .remove(&user.record_key())
            .map_or(ResetOutcome::NotFound, |last_upload| ResetOutcome::Cleared {
                last_upload,
            });
        info!(user = %user, cleared = matches!(outcome, ResetOutcome::Cleared { .. }), "Cooldown reset");
        outcome
    }

    /// Feedback for the author of a gated message.
    pub fn notice_for(&self, verdict: &Verdict) -> Option<Notice> {
        match verdict {
            Verdict::Ignore => None,
            Verdict::RejectType => Some(Notice::invalid_file(&self.extension)),
            Verdict::RejectCooldown { days_remaining } => {
                Some(Notice::limit_reached(*days_remaining))
            }
            Verdict::Accept => Some(Notice::accepted(self.policy.window_days())),
        }
    }

    /// The upload rules for this gate.
    pub fn rules_notice(&self) -> Notice {
        Notice::rules(&self.extension, self.policy.window_days())
    }
}
