//! User-facing replies.

use crate::gate::{ResetOutcome, UploadStatus};
use sc2clips_common::format_timestamp;

/// Footer shown under every notice.
pub const NOTICE_FOOTER: &str = "StarCraft Clips Bot";

/// Kind of notice, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Upload rejected for its file type, or a refused action.
    Rejected,
    /// Upload rejected, or status reported, while a cooldown runs.
    Cooldown,
    /// Upload accepted, or the user is free to upload.
    Accepted,
    /// Rules display.
    Rules,
    /// An administrator action succeeded.
    AdminDone,
    /// An administrator action found nothing to do.
    AdminMissing,
    /// A command failed unexpectedly.
    Failure,
}

impl Severity {
    /// Embed colour as `0xRRGGBB`.
    pub const fn colour(self) -> u32 {
        match self {
            Self::Rejected => 0xE7_4C_3C,
            Self::Cooldown => 0xE6_7E_22,
            Self::Accepted => 0x2E_CC_71,
            Self::Rules => 0x9B_59_B6,
            Self::AdminDone => 0x34_98_DB,
            Self::AdminMissing => 0xF1_C4_0F,
            Self::Failure => 0x99_2D_22,
        }
    }
}

/// A titled message for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Embed title.
    pub title: String,
    /// Embed description.
    pub body: String,
    /// Colour selector.
    pub severity: Severity,
}

impl Notice {
    /// Creates a notice.
    pub fn new(title: impl Into<String>, body: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
        }
    }

    /// The message had no replay attachment.
    pub fn invalid_file(extension: &str) -> Self {
        Self::new(
            "❌ Invalid file",
            format!("Only {extension} files are allowed in this channel."),
            Severity::Rejected,
        )
    }

    /// The author is still on cooldown.
    pub fn limit_reached(days_remaining: i64) -> Self {
        Self::new(
            "⏳ Monthly limit reached",
            format!(
                "You have already submitted a replay this month. You can submit another one in {}.",
                days(days_remaining)
            ),
            Severity::Cooldown,
        )
    }

    /// The replay was accepted.
    pub fn accepted(window_days: i64) -> Self {
        Self::new(
            "✅ Replay received",
            format!(
                "Your replay has been accepted. You can submit another one in {}.",
                days(window_days)
            ),
            Severity::Accepted,
        )
    }

    /// Upload rules.
    pub fn rules(extension: &str, window_days: i64) -> Self {
        Self::new(
            "📜 Replay submission rules",
            format!(
                "1. Only {extension} files are allowed\n\
                 2. Each user may submit **1 replay every {}**\n\
                 3. Replays must be your own games\n\n\
                 Thanks for taking part!",
                days(window_days)
            ),
            Severity::Rules,
        )
    }

    /// The invoker's own upload status.
    pub fn status(status: &UploadStatus) -> Self {
        match status {
            UploadStatus::Active {
                last_upload,
                days_remaining,
            } => Self::new(
                "⏳ Your status",
                format!(
                    "Last replay accepted on {}. You can submit your next replay in {}.",
                    format_timestamp(*last_upload),
                    days(*days_remaining)
                ),
                Severity::Cooldown,
            ),
            UploadStatus::Elapsed { last_upload } => Self::new(
                "✅ Ready to submit",
                format!(
                    "Last replay accepted on {}. You can submit a new replay now.",
                    format_timestamp(*last_upload)
                ),
                Severity::Accepted,
            ),
            UploadStatus::NoRecord => Self::new(
                "✅ Ready to submit",
                "You have not submitted any replay yet. You can submit one now!",
                Severity::Accepted,
            ),
        }
    }

    /// Result of an administrative reset of `display_name`'s record.
    pub fn reset(outcome: &ResetOutcome, display_name: &str) -> Self {
        match outcome {
            ResetOutcome::Cleared { .. } => Self::new(
                "🔄 Counter reset",
                format!("You have reset the counter for {display_name}."),
                Severity::AdminDone,
            ),
            ResetOutcome::NotFound => Self::new(
                "⚠️ User not found",
                format!("No records found for {display_name}."),
                Severity::AdminMissing,
            ),
        }
    }

    /// The invoker lacks the administrator permission.
    pub fn missing_permission(command: &str) -> Self {
        Self::new(
            "🚫 Permission denied",
            format!("Only administrators can use `{command}`."),
            Severity::Rejected,
        )
    }

    /// A command failed for reasons the user cannot fix.
    pub fn failure() -> Self {
        Self::new(
            "⚠️ Something went wrong",
            "The command could not be completed. Please try again later.",
            Severity::Failure,
        )
    }
}

fn days(count: i64) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc2clips_common::test_utils::mock_timestamp;

    #[test]
    fn test_colours_follow_severity() {
        assert_eq!(Notice::invalid_file(".SC2Replay").severity.colour(), 0xE74C3C);
        assert_eq!(Notice::limit_reached(3).severity.colour(), 0xE67E22);
        assert_eq!(Notice::accepted(30).severity.colour(), 0x2ECC71);
        assert_eq!(Notice::rules(".SC2Replay", 30).severity.colour(), 0x9B59B6);
    }

    #[test]
    fn test_limit_reached_mentions_days() {
        let notice = Notice::limit_reached(20);
        assert!(notice.body.contains("in 20 days"));

        let notice = Notice::limit_reached(1);
        assert!(notice.body.contains("in 1 day."));
    }

    #[test]
    fn test_rules_mention_extension_and_window() {
        let notice = Notice::rules(".SC2Replay", 30);
        assert!(notice.body.contains("Only .SC2Replay files"));
        assert!(notice.body.contains("1 replay every 30 days"));
    }

    #[test]
    fn test_status_notices() {
        let last_upload = mock_timestamp(2024, 1, 1, 0, 0, 0);
        let waiting = Notice::status(&UploadStatus::Active {
            last_upload,
            days_remaining: 5,
        });
        assert_eq!(waiting.severity, Severity::Cooldown);
        assert!(waiting.body.contains("5 days"));
        assert!(waiting.body.contains("on 2024-01-01 00:00:00 UTC"));

        let ready = Notice::status(&UploadStatus::Elapsed { last_upload });
        assert_eq!(ready.severity, Severity::Accepted);
        assert!(ready.body.contains("2024-01-01 00:00:00 UTC"));

        let fresh = Notice::status(&UploadStatus::NoRecord);
        assert!(fresh.body.contains("not submitted any replay yet"));
    }

    #[test]
    fn test_reset_notices() {
        let cleared = Notice::reset(
            &ResetOutcome::Cleared {
                last_upload: mock_timestamp(2024, 1, 1, 0, 0, 0),
            },
            "Serral",
        );
        assert_eq!(cleared.severity, Severity::AdminDone);
        assert!(cleared.body.contains("Serral"));

        let missing = Notice::reset(&ResetOutcome::NotFound, "Serral");
        assert_eq!(missing.severity, Severity::AdminMissing);
        assert_eq!(missing.severity.colour(), 0xF1C40F);
    }
}
