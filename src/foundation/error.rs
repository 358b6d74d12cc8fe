/// Convenience result type used across scrollfx.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Error taxonomy for the configuration and loading paths.
///
/// The per-frame path never returns errors: degenerate geometry and missing input are
/// recovered locally by the mappers and interpolators.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Invalid user-provided geometry or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Inconsistent scene or script configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
