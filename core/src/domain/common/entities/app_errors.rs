use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid confidence threshold: {0} (expected a value in [0, 1])")]
    InvalidThreshold(f64),

    #[error("Invalid suppression threshold: {0} (expected a value in [0, 1])")]
    InvalidSuppressionThreshold(f64),

    #[error("max_results must be a positive integer")]
    InvalidMaxResults,

    #[error("Missing required credential: {0}")]
    MissingCredential(String),

    #[error("Image too large: {size} bytes (max {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("External service timed out after {0} ms")]
    Timeout(u128),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Contract violations are bugs in the caller and must not be retried
    /// or recovered from.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidThreshold(_)
                | CoreError::InvalidSuppressionThreshold(_)
                | CoreError::InvalidMaxResults
                | CoreError::MissingCredential(_)
        )
    }
}
