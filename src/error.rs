/// Errors raised by toolbelt helpers
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing or unusable when wrapping a function.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for toolbelt operations
pub type Result<T> = std::result::Result<T, Error>;
