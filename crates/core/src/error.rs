//! Error types for stowage.

use thiserror::Error;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause carried by [`Error::PackingFailure`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during packing operations.
///
/// An item that finds no legal position is not an error; it ends up in
/// [`Outcome::unpacked`](crate::Outcome::unpacked).
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or fails validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The items weigh more than the container can carry.
    #[error("{0}")]
    CapacityExceeded(String),

    /// An item is larger than the container on every axis.
    #[error("{0}")]
    ItemTooLarge(String),

    /// Unexpected fault inside a packing strategy.
    #[error("An error occurred during packing optimization: {source}")]
    PackingFailure {
        /// The underlying cause.
        #[source]
        source: BoxedCause,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Wraps an arbitrary cause into [`Error::PackingFailure`].
    pub fn packing_failure(source: impl Into<BoxedCause>) -> Self {
        Error::PackingFailure {
            source: source.into(),
        }
    }

    /// Returns true for the error kinds surfaced to callers as-is.
    ///
    /// Everything else is wrapped into [`Error::PackingFailure`] by the optimizer.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_)
                | Error::CapacityExceeded(_)
                | Error::ItemTooLarge(_)
                | Error::PackingFailure { .. }
        )
    }
}
