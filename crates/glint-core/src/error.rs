//! Error types for sink installation and teardown

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from configuring or installing the console sink.
///
/// Rendering never produces one of these: the sink is best-effort and
/// swallows write failures so a single unwritable record cannot silence
/// the records after it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("another logger is already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_display_messages() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream closed");
        let err: Error = io_err.into();
        assert_eq!(err.to_string(), "IO error: stream closed");
    }
}
