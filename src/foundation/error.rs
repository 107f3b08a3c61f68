//! Error type for configuration and show loading.
//!
//! The geometry core is infallible: the cube is a fixed 8x8x8 lattice and the
//! plane algebra cannot produce an inconsistent axis/offset/direction triple.
//! Errors only arise at the edges, when parsing or validating a show.

/// Convenience alias used throughout the crate.
pub type LuxelResult<T> = Result<T, LuxelError>;

/// Errors produced while loading or validating a show configuration.
#[derive(thiserror::Error, Debug)]
pub enum LuxelError {
    /// A show or effect parameter failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration value could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Any other error bubbling up from collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LuxelError {
    /// Build a [`LuxelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LuxelError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
