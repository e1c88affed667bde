/// Crate-wide error type carrying a process exit code.
///
/// Exit-code conventions:
/// - `2` — bad input (unreadable CSV, invalid artifact, schema problems)
/// - `3` — the reference dataset yielded no usable rows
/// - `4` — runtime failure (terminal, model evaluation)
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

    /// Bad input file or schema (exit code 2).
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Empty dataset after validation (exit code 3).
    pub fn empty_data(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Terminal or model runtime failure (exit code 4).
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(4, message)
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
    fn named_constructors_map_to_exit_codes() {
        assert_eq!(AppError::input("x").exit_code(), 2);
        assert_eq!(AppError::empty_data("x").exit_code(), 3);
        assert_eq!(AppError::runtime("x").exit_code(), 4);
    }
}
