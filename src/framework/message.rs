//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate used by bulk removal.
pub type Filter<T> = fn(&T) -> bool;

/// The current edit target: which entity is selected and the buffer seeded
/// from its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<Id, Buffer> {
    pub id: Id,
    pub buffer: Buffer,
}

/// Request sent to the actor.
///
/// Besides the CRUD + Action set, the actor understands a selection protocol
/// (`Select`, `CurrentSelection`, `UpdateSelected`) and bulk removal (`Purge`).
///
/// Unknown ids are never an error: lookups answer `None`, removals answer
/// `false`, actions answer `None`.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Select {
        id: Option<T::Id>,
        respond_to: Response<Option<T::Update>>,
    },
    CurrentSelection {
        respond_to: Response<Option<Selection<T::Id, T::Update>>>,
    },
    UpdateSelected {
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<T::ActionResult>>,
    },
    Purge {
        filter: Filter<T>,
        respond_to: Response<usize>,
    },
}
