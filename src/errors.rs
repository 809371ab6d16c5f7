use thiserror::Error;

/// The error type for every fallible ring queue operation.
///
/// All variants describe caller-input problems. None of them is transient,
/// so nothing in the crate retries on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Invalid capacity {requested}: capacity must be a non-negative integer")]
    InvalidCapacity { requested: String },

    #[error("Index {index} out of range for ring of capacity {capacity} ({stored} stored)")]
    IndexOutOfRange {
        index: usize,
        capacity: usize,
        stored: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RingError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(ring_err) = e.downcast_ref::<RingError>() {
        return match ring_err {
            RingError::Config(_) | RingError::InvalidCapacity { .. } => EXIT_CONFIG_ERROR,
            RingError::IndexOutOfRange { .. } => EXIT_ERROR,
        };
    }

    EXIT_ERROR
}
