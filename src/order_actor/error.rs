//! Error types for the Order actor.

use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A creation payload broke a rule; `field` names the first offender.
    #[error("Order validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Writing the CSV export failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Maps a framework error, unwrapping errors raised by the order entity itself.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => match other.into_entity_error::<OrderError>() {
                Ok(order_error) => order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        OrderError::from_framework(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_errors_are_recovered() {
        let wrapped = FrameworkError::EntityError(Box::new(OrderError::Validation {
            field: "acara".into(),
            message: "Nama acara wajib diisi".into(),
        }));
        assert!(matches!(
            OrderError::from_framework(wrapped),
            OrderError::Validation { field, .. } if field == "acara"
        ));
    }

    #[test]
    fn test_framework_errors_map() {
        assert_eq!(
            OrderError::from_framework(FrameworkError::NotFound("x".into())),
            OrderError::NotFound("x".into())
        );
        assert!(matches!(
            OrderError::from(FrameworkError::ActorClosed),
            OrderError::ActorCommunicationError(_)
        ));
    }
}
