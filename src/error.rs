//! Application-level error: an exit code plus a human-readable message.
//!
//! Formulas and dispatch never fail on their inputs; only the front-end's
//! I/O can, so this type lives at the edges.

/// Export path could not be written, or the report failed to serialize.
pub const EXIT_EXPORT: u8 = 2;
/// Writing to stdout failed.
pub const EXIT_OUTPUT: u8 = 3;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::new(EXIT_EXPORT, message)
    }

    pub fn output(err: std::io::Error) -> Self {
        Self::new(EXIT_OUTPUT, format!("Failed to write output: {err}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_error_carries_code_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = AppError::output(io);
        assert_eq!(err.exit_code(), EXIT_OUTPUT);
        assert!(err.to_string().contains("pipe closed"), "{err}");
    }
}
