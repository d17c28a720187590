//! Error types for the Order actor.

use crate::framework::FrameworkError;
use crate::model::{OrderId, ValidationError};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Unknown ids are not errors: operations on them are no-ops.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field was blank.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The snapshot could not be written; the operation was rolled back.
    #[error("Order storage error: {0}")]
    Storage(String),

    /// The highest stored id leaves no room for a new one.
    #[error("No order id available after {0}")]
    IdsExhausted(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Storage(e) => OrderError::Storage(e.to_string()),
            FrameworkError::EntityError(e) => match e.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderField;
    use crate::storage::StorageError;

    #[test]
    fn test_entity_errors_are_unwrapped() {
        let validation = ValidationError {
            missing: vec![OrderField::Address],
        };
        let framework = FrameworkError::EntityError(Box::new(OrderError::from(validation.clone())));
        assert_eq!(OrderError::from(framework), OrderError::Validation(validation));
    }

    #[test]
    fn test_storage_and_channel_errors() {
        let storage = FrameworkError::Storage(StorageError::Backend("disk full".into()));
        assert_eq!(
            OrderError::from(storage),
            OrderError::Storage("Backend error: disk full".into())
        );
        assert_eq!(
            OrderError::from(FrameworkError::ActorClosed),
            OrderError::ActorCommunicationError("Actor closed".into())
        );
    }
}
