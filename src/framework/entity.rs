//! # ActorEntity Trait
//!
//! The contract a record type implements to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor): associated types for the
//! id, the creation and edit payloads, custom actions, injected context and
//! errors, plus the lifecycle hooks the actor calls around each operation.
//!
//! Entities are also `Serialize + DeserializeOwned` because the actor persists
//! the whole collection as one snapshot in the slot named by
//! [`ActorEntity::SLOT`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other services. The `Context`
/// type is injected into every hook when the actor starts running, which keeps
/// dependencies out of the constructor.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Unique identifier. Ordered so the actor can track the highest id it has
    /// ever issued.
    type Id: Eq + Ord + Clone + Send + Sync + Display + Debug;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for editing an existing instance. Doubles as the edit buffer
    /// seeded on selection, hence `Clone`.
    type Update: Clone + Send + Sync + Debug;

    /// Resource-specific operations (e.g. status transitions).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// Error type surfaced by hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the storage slot holding the snapshot.
    const SLOT: &'static str;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Produces the id for the next created entity.
    ///
    /// `last` is the highest id the actor has issued or restored so far; the
    /// returned id must be strictly greater for ids to stay unique. Fails when
    /// no greater id exists.
    fn next_id(last: Option<&Self::Id>) -> Result<Self::Id, Self::Error>;

    /// Construct the full entity from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Copy of the editable fields, used to seed the edit buffer.
    fn edit_buffer(&self) -> Self::Update;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an edit. Returning an error must leave `self` untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
