use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetirementPlanError {
    #[error("Invalid plan input: {field} — {reason}")]
    InvalidPlanInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RetirementPlanError {
    fn from(e: serde_json::Error) -> Self {
        RetirementPlanError::SerializationError(e.to_string())
    }
}
