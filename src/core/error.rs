//! Error types for persistence and image loading.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the game. None of these are fatal:
/// the UI logs them and keeps going with the previous state.
#[derive(Debug, Error)]
pub enum ClickerError {
    #[error("failed to read game state from {}: {source}", path.display())]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid click count {content:?} in {}: {source}", path.display())]
    PersistenceParse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to save game state to {}: {source}", path.display())]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has no pixels", path.display())]
    ImageEmpty { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ClickerError>;
