use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlindTestError {
    #[error("Slot {slot} out of range (total: {count})")]
    SlotOutOfRange { slot: usize, count: usize },

    #[error("Expected {expected} image paths, got {actual}")]
    ImageCountMismatch { expected: usize, actual: usize },

    #[error("Invalid container size: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("Survey must contain at least one group")]
    NoGroups,

    #[error("Invalid script: {0}")]
    InvalidScript(String),
}

pub type Result<T> = std::result::Result<T, BlindTestError>;
