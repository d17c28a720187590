//! Generic actor framework for persisted record collections.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor owning an ordered, persisted collection
//! - [`ResourceClient`] - Type-safe handle for sending requests to the actor
//! - [`ActorClient`] - Shared read/delete methods for domain-specific clients
//! - [`FrameworkError`] - Errors raised by the plumbing
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response, Selection};
