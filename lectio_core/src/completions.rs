//! Completion-mark persistence with file locking.
//!
//! The set of completed day numbers is the only state the CLI mutates, and
//! it may be written from more than one process (a cron reminder marking a
//! day, a terminal session doing the same). Saves go through a locked temp
//! file and an atomic rename; loads take a shared lock.
//!
//! The scheduling core itself never touches this module: it receives the
//! day-number set by value and treats it as a read-only snapshot.

use crate::types::CompletionSet;
use crate::{Error, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// The persisted completion state for one plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletionLog {
    pub plan_id: Uuid,
    pub days: CompletionSet,
}

impl CompletionLog {
    /// Fresh, empty log for a plan
    pub fn new(plan_id: Uuid) -> Self {
        Self {
            plan_id,
            days: CompletionSet::new(),
        }
    }

    /// Mark a day complete; returns false if it already was
    pub fn mark(&mut self, day_number: u32) -> bool {
        self.days.insert(day_number)
    }

    /// Remove a completion mark; returns false if the day wasn't marked
    pub fn unmark(&mut self, day_number: u32) -> bool {
        self.days.remove(&day_number)
    }

    pub fn is_complete(&self, day_number: u32) -> bool {
        self.days.contains(&day_number)
    }

    /// Load the log for `plan_id` with shared locking
    ///
    /// Returns an empty log if the file doesn't exist, can't be parsed, or
    /// belongs to a different plan. A reading log is recoverable by
    /// re-checking days; refusing to start over a bad file would not be.
    pub fn load(path: &Path, plan_id: Uuid) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No completion log found, starting empty");
            return Ok(Self::new(plan_id));
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open completion log {:?}: {}. Starting empty.",
                    path,
                    e
                );
                return Ok(Self::new(plan_id));
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock completion log {:?}: {}. Starting empty.",
                path,
                e
            );
            return Ok(Self::new(plan_id));
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read completion log {:?}: {}. Starting empty.",
                path,
                e
            );
            return Ok(Self::new(plan_id));
        }

        file.unlock()?;

        match serde_json::from_str::<CompletionLog>(&contents) {
            Ok(log) if log.plan_id == plan_id => {
                tracing::debug!("Loaded {} completion marks from {:?}", log.days.len(), path);
                Ok(log)
            }
            Ok(log) => {
                tracing::warn!(
                    "Completion log {:?} belongs to plan {}, not {}. Starting empty.",
                    path,
                    log.plan_id,
                    plan_id
                );
                Ok(Self::new(plan_id))
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse completion log {:?}: {}. Starting empty.",
                    path,
                    e
                );
                Ok(Self::new(plan_id))
            }
        }
    }

    /// Save the log with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "completion log path missing parent")
        })?)?;

        // Exclusive lock on the temp file serializes concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} completion marks to {:?}", self.days.len(), path);
        Ok(())
    }

    /// Load, modify and save back atomically
    pub fn update<F>(path: &Path, plan_id: Uuid, f: F) -> Result<Self>
    where
        F: FnOnce(&mut CompletionLog) -> Result<()>,
    {
        let mut log = Self::load(path, plan_id)?;
        f(&mut log)?;
        log.save(path)?;
        Ok(log)
    }
}
