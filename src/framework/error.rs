//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the entity's own
//! error type (which travels inside [`FrameworkError::EntityError`]).

use crate::storage::StorageError;

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
