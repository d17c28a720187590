//! Order-specific resource logic and entity implementation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] status transitions
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;
use crate::storage::StorageInterface;
use std::sync::Arc;

/// Creates a new Order actor over `storage` and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn StorageInterface>,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, OrderClient::new(generic_client))
}
