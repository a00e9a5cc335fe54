//! # Error Module
//!
//! Domain errors for Minibank, defined with thiserror.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The account factory was given a kind string it does not know.
    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    /// A caller required an account the registry does not hold.
    /// The registry itself reports a miss as `None`, never as an error.
    #[error("Account not found: {0}")]
    AccountNotFound(u32),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidAccountType("loan".to_string());
        assert_eq!(err.to_string(), "Invalid account type: loan");

        let err = CoreError::AccountNotFound(1234567890);
        assert_eq!(err.to_string(), "Account not found: 1234567890");
    }
}
