//! Flat-file persistence of the click count.
//!
//! The state file holds a single line with the decimal click count and is
//! rewritten in full on every save.

use crate::core::error::{ClickerError, Result};
use crate::core::game_state::GameState;
use crate::utils::file_helper;
use std::path::{Path, PathBuf};

/// What a load found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A count was read and applied.
    Restored(u64),
    /// No state file yet.
    Missing,
    /// The file exists but its first line is empty.
    Empty,
}

/// Reads and writes [`GameState`] at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored count into `state`.
    ///
    /// `state` is only touched when a valid count was read.
    pub fn load(&self, state: &mut GameState) -> Result<LoadOutcome> {
        if !file_helper::file_exists(&self.path) {
            return Ok(LoadOutcome::Missing);
        }

        let line = file_helper::read_first_line(&self.path).map_err(|source| {
            ClickerError::PersistenceRead {
                path: self.path.clone(),
                source,
            }
        })?;

        let content = match line.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => return Ok(LoadOutcome::Empty),
        };

        let count = content
            .parse::<u64>()
            .map_err(|source| ClickerError::PersistenceParse {
                path: self.path.clone(),
                content: content.to_string(),
                source,
            })?;

        state.click_count = count;
        Ok(LoadOutcome::Restored(count))
    }

    /// Overwrite the state file with the current count.
    pub fn save(&self, state: &GameState) -> Result<()> {
        file_helper::overwrite(&self.path, &state.click_count.to_string()).map_err(|source| {
            ClickerError::PersistenceWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}
