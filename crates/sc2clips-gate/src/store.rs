//! Persisted mapping from user id to last accepted upload.
//!
//! The whole mapping lives in memory behind a mutex and is written back to a
//! single JSON file after every mutation. Persistence is best effort: I/O
//! failures are logged and the in-memory state stays authoritative.

use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use sc2clips_common::parse_timestamp;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// User id (decimal string) to the time of their last accepted upload.
pub type Records = BTreeMap<String, DateTime<Utc>>;

/// Cooldown records backed by a JSON file.
#[derive(Debug)]
pub struct CooldownStore {
    path: PathBuf,
    records: Mutex<Records>,
}

impl CooldownStore {
    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, with a warning; it is overwritten on the
    /// next mutation.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = read_records(&path);
        info!(path = %path.display(), records = records.len(), "Cooldown store loaded");
        Self {
            path,
            records: Mutex::new(records),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locks the records for a read-check-write sequence.
    ///
    /// Do not hold the guard across an `.await`.
    pub fn lock(&self) -> RecordsGuard<'_> {
        RecordsGuard {
            path: &self.path,
            records: self.records.lock(),
        }
    }

    /// Last accepted upload of `user`, if any.
    pub fn get(&self, user: &str) -> Option<DateTime<Utc>> {
        self.lock().get(user)
    }

    /// Records an accepted upload and flushes the mapping.
    pub fn set(&self, user: &str, at: DateTime<Utc>) {
        self.lock().set(user, at);
    }

    /// Deletes the record of `user`, returning it. Absent users are a no-op.
    pub fn remove(&self, user: &str) -> Option<DateTime<Utc>> {
        self.lock().remove(user)
    }

    /// Writes the whole mapping to disk.
    pub fn save(&self) -> StoreResult<()> {
        self.lock().save()
    }

    /// Copy of the current mapping.
    pub fn snapshot(&self) -> Records {
        self.records.lock().clone()
    }

    /// Number of users with a record.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// True when no user has a record.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

/// Exclusive access to the records.
pub struct RecordsGuard<'a> {
    path: &'a Path,
    records: MutexGuard<'a, Records>,
}

impl RecordsGuard<'_> {
    /// Last accepted upload of `user`, if any.
    pub fn get(&self, user: &str) -> Option<DateTime<Utc>> {
        self.records.get(user).copied()
    }

    /// Upserts the record of `user` and flushes the mapping.
    pub fn set(&mut self, user: &str, at: DateTime<Utc>) {
        self.records.insert(user.to_string(), at);
        self.flush();
    }

    /// Deletes the record of `user` and flushes the mapping when it existed.
    pub fn remove(&mut self, user: &str) -> Option<DateTime<Utc>> {
        let removed = self.records.remove(user);
        if removed.is_some() {
            self.flush();
        }
        removed
    }

    /// Writes the whole mapping to disk.
    pub fn save(&self) -> StoreResult<()> {
        write_records(self.path, &self.records)
    }

    fn flush(&self) {
        match self.save() {
            Ok(()) => debug!(
                path = %self.path.display(),
                records = self.records.len(),
                "Cooldown store flushed"
            ),
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist cooldown store, keeping in-memory state"
            ),
        }
    }
}

fn read_records(path: &Path) -> Records {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No cooldown store yet, starting empty");
            return Records::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cooldown store unreadable, starting empty");
            return Records::new();
        }
    };

    if content.trim().is_empty() {
        return Records::new();
    }

    let raw: BTreeMap<String, serde_json::Value> = match serde_json::from_str(&content) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cooldown store corrupt, starting empty");
            return Records::new();
        }
    };

    raw.into_iter()
        .filter_map(|(user, value)| {
            let parsed = value.as_str().and_then(parse_timestamp);
            if parsed.is_none() {
                warn!(user = %user, value = %value, "Dropping cooldown record with invalid timestamp");
            }
            parsed.map(|at| (user, at))
        })
        .collect()
}

fn write_records(path: &Path, records: &Records) -> StoreResult<()> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(records)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory).map_err(io_error)?;

    let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;
    file.write_all(json.as_bytes()).map_err(io_error)?;
    file.write_all(b"\n").map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}
