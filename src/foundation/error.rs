/// Result alias used across the crate.
pub type LogoResult<T> = Result<T, LogoError>;

#[derive(thiserror::Error, Debug)]
/// Error type for the boundaries of the crate (model validation, generation intake, I/O).
///
/// Geometry never produces errors; invalid layers degrade to empty paths instead.
pub enum LogoError {
    /// Composition/layer model validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// The generative collaborator failed or returned data violating the contract.
    #[error("generation error: {0}")]
    Generation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other wrapped failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    /// Build a [`LogoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogoError::Generation`].
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`LogoError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LogoError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
