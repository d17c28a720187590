//! # Generic Client
//!
//! The sending half of a [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Filter, ResourceRequest, Selection};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a channel sender, so it is cheap to clone and share across
/// tasks. Every method sends one request and awaits its one-shot reply.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// The whole collection in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    /// Sets (or with `None`, clears) the edit target. Returns the seeded edit
    /// buffer, or `None` if the selection ended up empty.
    pub async fn select(&self, id: Option<T::Id>) -> Result<Option<T::Update>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Select { id, respond_to })
            .await
    }

    pub async fn current_selection(
        &self,
    ) -> Result<Option<Selection<T::Id, T::Update>>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::CurrentSelection { respond_to })
            .await
    }

    /// Applies `update` to the selected entity. `Ok(None)` when nothing is
    /// selected.
    pub async fn update_selected(&self, update: T::Update) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateSelected { update, respond_to })
            .await
    }

    /// Removes the entity. `Ok(false)` when the id is unknown.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Runs a custom action. `Ok(None)` when the id is unknown.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<Option<T::ActionResult>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Removes every entity matching `filter`, returning how many went.
    pub async fn purge(&self, filter: Filter<T>) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Purge { filter, respond_to })
            .await
    }
}
