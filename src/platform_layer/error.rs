use std::io;

// Represents errors that can occur within the platform abstraction layer.
//
// This enum centralizes error handling for operations on the console UI,
// such as failing to read user input or write to the terminal.
#[derive(Debug)]
pub enum PlatformError {
    /// An error reading from or writing to the console.
    Io(io::Error),
    /// The input stream ended while the platform was waiting for the user.
    InputClosed,
    /// An invalid handle (e.g., an unknown `WindowId`) was used.
    InvalidHandle(String),
    /// A requested operation could not be completed.
    OperationFailed(String),
}

impl From<io::Error> for PlatformError {
    fn from(err: io::Error) -> Self {
        PlatformError::Io(err)
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Io(e) => write!(f, "Console I/O Error: {e}"),
            PlatformError::InputClosed => write!(f, "Input Closed"),
            PlatformError::InvalidHandle(s) => write!(f, "Invalid Handle: {s}"),
            PlatformError::OperationFailed(s) => write!(f, "Operation Failed: {s}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A specialized `Result` type for platform layer operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
