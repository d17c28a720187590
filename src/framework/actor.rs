//! # Generic Actor Server
//!
//! [`ResourceActor`] owns an ordered collection of entities and processes every
//! request sequentially, so the collection needs no locks. After each
//! successful mutation it rewrites the full snapshot through the injected
//! [`StorageInterface`]; the response is only sent once that write has
//! finished.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Filter, ResourceRequest, Selection};
use crate::storage::{StorageError, StorageInterface};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`,
/// `selection`) and the receiver end of the channel. Requests run to
/// completion one at a time, which is what keeps ids unique and the snapshot
/// consistent with memory.
///
/// # Implementation Details
///
/// * **Store**: a `Vec` in insertion order. There is no implicit sorting.
/// * **Ids**: issued by [`ActorEntity::next_id`] from the highest id seen so
///   far, including ids restored from storage and ids of deleted entities.
/// * **Persistence**: the snapshot is restored once when `run` starts. Each
///   mutation clones the previous state, applies the change, and writes the
///   snapshot; if the write fails the previous state is put back and the
///   caller receives [`FrameworkError::Storage`].
/// * **Selection**: at most one entity is the edit target. Removing that
///   entity clears the selection.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    storage: Arc<dyn StorageInterface>,
    store: Vec<T>,
    selection: Option<Selection<T::Id, T::Update>>,
    last_id: Option<T::Id>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for space.
    /// * `storage` - Backend holding the snapshot slot.
    ///
    /// The snapshot is not read here; `run` restores it before serving the
    /// first request.
    pub fn new(
        buffer_size: usize,
        storage: Arc<dyn StorageInterface>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Order" instead of "order_desk::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            storage,
            store: Vec::new(),
            selection: None,
            last_id: None,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook. It is supplied here rather than
    /// in `new` so that dependencies can be wired after construction.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, slot = T::SLOT, "Actor started");
        self.restore().await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Select { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.select(id)));
                }
                ResourceRequest::CurrentSelection { respond_to } => {
                    let _ = respond_to.send(Ok(self.selection.clone()));
                }
                ResourceRequest::UpdateSelected { update, respond_to } => {
                    let _ = respond_to.send(self.update_selected(update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.action(id, action, &context).await);
                }
                ResourceRequest::Purge { filter, respond_to } => {
                    let _ = respond_to.send(self.purge(filter, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Loads the snapshot. Anything short of a readable, parsable snapshot
    /// leaves the store empty.
    async fn restore(&mut self) {
        let entity_type = self.entity_type;
        let bytes = match self.storage.get_bytes(T::SLOT).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound) => {
                info!(entity_type, slot = T::SLOT, "No snapshot, starting empty");
                return;
            }
            Err(e) => {
                warn!(entity_type, slot = T::SLOT, error = %e, "Snapshot unreadable, starting empty");
                return;
            }
        };

        let items: Vec<T> = match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(e) => {
                warn!(entity_type, slot = T::SLOT, error = %e, "Snapshot corrupt, starting empty");
                return;
            }
        };

        let mut seen = BTreeSet::new();
        for item in items {
            if seen.insert(item.id().clone()) {
                self.store.push(item);
            } else {
                warn!(entity_type, id = %item.id(), "Dropping duplicate id from snapshot");
            }
        }
        self.last_id = seen.last().cloned();
        info!(entity_type, size = self.store.len(), "Restored");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(&self.store)?;
        self.storage.set_bytes(T::SLOT, bytes).await
    }

    /// Writes the snapshot, putting `previous` back if the write fails.
    async fn commit(&mut self, previous: Vec<T>) -> Result<(), FrameworkError> {
        if let Err(e) = self.persist().await {
            warn!(entity_type = self.entity_type, error = %e, "Persist failed, rolling back");
            self.store = previous;
            return Err(FrameworkError::Storage(e));
        }
        Ok(())
    }

    /// Drops the selection if its entity is gone.
    fn release_orphaned_selection(&mut self) {
        let orphaned = self
            .selection
            .as_ref()
            .is_some_and(|selection| self.position(&selection.id).is_none());
        if orphaned {
            debug!(entity_type = self.entity_type, "Selected entity removed, selection cleared");
            self.selection = None;
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");

        let id = match T::next_id(self.last_id.as_ref()) {
            Ok(id) => id,
            Err(e) => {
                warn!(entity_type, error = %e, "No id available");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };
        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.last_id = Some(id.clone());
        let previous = self.store.clone();
        self.store.push(item);
        self.commit(previous).await?;

        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    fn select(&mut self, id: Option<T::Id>) -> Option<T::Update> {
        let selection = id.and_then(|id| {
            let item = self.store.iter().find(|item| item.id() == &id)?;
            Some(Selection {
                buffer: item.edit_buffer(),
                id,
            })
        });

        match &selection {
            Some(selection) => debug!(entity_type = self.entity_type, id = %selection.id, "Selected"),
            None => debug!(entity_type = self.entity_type, "Selection cleared"),
        }

        let buffer = selection.as_ref().map(|selection| selection.buffer.clone());
        self.selection = selection;
        buffer
    }

    async fn update_selected(
        &mut self,
        update: T::Update,
        context: &T::Context,
    ) -> Result<Option<T>, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?update, "UpdateSelected");

        let Some(id) = self.selection.as_ref().map(|selection| selection.id.clone()) else {
            debug!(entity_type, "Nothing selected");
            return Ok(None);
        };
        let Some(index) = self.position(&id) else {
            warn!(entity_type, %id, "Selected entity no longer exists");
            self.selection = None;
            return Ok(None);
        };

        let previous = self.store.clone();
        if let Err(e) = self.store[index].on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            self.store = previous;
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.commit(previous).await?;
        self.selection = None;

        info!(entity_type, %id, "Updated");
        Ok(Some(self.store[index].clone()))
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<bool, FrameworkError> {
        let entity_type = self.entity_type;
        let Some(index) = self.position(&id) else {
            debug!(entity_type, %id, "Delete of unknown id ignored");
            return Ok(false);
        };

        if let Err(e) = self.store[index].on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let previous = self.store.clone();
        self.store.remove(index);
        self.commit(previous).await?;
        self.release_orphaned_selection();

        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(true)
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<Option<T::ActionResult>, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");
        let Some(index) = self.position(&id) else {
            debug!(entity_type, %id, "Action on unknown id ignored");
            return Ok(None);
        };

        let previous = self.store.clone();
        let result = match self.store[index].handle_action(action, context).await {
            Ok(result) => result,
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                self.store = previous;
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };
        self.commit(previous).await?;

        info!(entity_type, %id, "Action ok");
        Ok(Some(result))
    }

    async fn purge(&mut self, filter: Filter<T>, context: &T::Context) -> Result<usize, FrameworkError> {
        let entity_type = self.entity_type;

        for item in self.store.iter().filter(|item| filter(item)) {
            if let Err(e) = item.on_delete(context).await {
                warn!(entity_type, id = %item.id(), error = %e, "on_delete failed, purge aborted");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        }

        let previous = self.store.clone();
        self.store.retain(|item| !filter(item));
        let removed = previous.len() - self.store.len();
        if removed == 0 {
            debug!(entity_type, "Purge matched nothing");
            return Ok(0);
        }
        self.commit(previous).await?;
        self.release_orphaned_selection();

        info!(entity_type, removed, size = self.store.len(), "Purged");
        Ok(removed)
    }
}
