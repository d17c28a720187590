use crate::framework::{ActorClient, FrameworkError, ResourceClient, Selection};
use crate::model::{Order, OrderDraft, OrderId};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Drafts are validated here before anything is sent, so a draft with a
/// blank field never reaches the actor. Unknown ids are reported as
/// `false` / `None`, never as errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places a new order and returns its id.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, OrderError> {
        debug!(?draft, "create_order called");
        if let Err(e) = draft.validate() {
            warn!(error = %e, "Rejected order draft");
            return Err(e.into());
        }

        info!("Sending create_order to actor");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Removes an order. Returns whether one was removed.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<bool, OrderError> {
        self.delete(id).await
    }

    /// Makes `id` the edit target and returns the seeded edit buffer. `None`
    /// (or an unknown id) clears the selection.
    #[instrument(skip(self))]
    pub async fn select_order(&self, id: Option<OrderId>) -> Result<Option<OrderDraft>, OrderError> {
        debug!("Sending request");
        self.inner.select(id).await.map_err(Self::map_error)
    }

    /// The current edit target and its buffer.
    #[instrument(skip(self))]
    pub async fn selection(&self) -> Result<Option<Selection<OrderId, OrderDraft>>, OrderError> {
        debug!("Sending request");
        self.inner.current_selection().await.map_err(Self::map_error)
    }

    /// Applies `edits` to the selected order and clears the selection.
    /// `Ok(None)` when nothing is selected.
    #[instrument(skip(self, edits))]
    pub async fn update_order(&self, edits: OrderDraft) -> Result<Option<Order>, OrderError> {
        debug!(?edits, "update_order called");
        if let Err(e) = edits.validate() {
            warn!(error = %e, "Rejected order edits");
            return Err(e.into());
        }
        self.inner.update_selected(edits).await.map_err(Self::map_error)
    }

    /// Selects `id` and applies `edits` to it. `Ok(None)` when the id is
    /// unknown.
    #[instrument(skip(self, edits))]
    pub async fn edit_order(&self, id: OrderId, edits: OrderDraft) -> Result<Option<Order>, OrderError> {
        edits.validate()?;
        if self.select_order(Some(id)).await?.is_none() {
            debug!(%id, "Nothing to edit");
            return Ok(None);
        }
        self.update_order(edits).await
    }

    /// Sets the completed flag. Returns whether the order was found.
    #[instrument(skip(self))]
    pub async fn mark_completed(&self, id: OrderId) -> Result<bool, OrderError> {
        self.perform(id, OrderAction::MarkCompleted).await
    }

    /// Sets the cancelled flag. Returns whether the order was found.
    #[instrument(skip(self))]
    pub async fn mark_cancelled(&self, id: OrderId) -> Result<bool, OrderError> {
        self.perform(id, OrderAction::MarkCancelled).await
    }

    /// Removes every completed order, cancelled or not. Returns how many went.
    #[instrument(skip(self))]
    pub async fn delete_completed_orders(&self) -> Result<usize, OrderError> {
        debug!("Sending request");
        let removed = self
            .inner
            .purge(|order: &Order| order.completed)
            .await
            .map_err(Self::map_error)?;
        info!(removed, "Deleted completed orders");
        Ok(removed)
    }

    /// Every order in collection order.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    async fn perform(&self, id: OrderId, action: OrderAction) -> Result<bool, OrderError> {
        debug!(?action, "Sending request");
        let result = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?;
        Ok(result.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create};

    fn pizza() -> OrderDraft {
        OrderDraft {
            kind_of_food: "Pizza".into(),
            quantity: "2".into(),
            pickup_date_time: "18:00".into(),
            personal_info: "Jo".into(),
            phone_number: "555".into(),
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn test_create_forwards_draft_unchanged() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(client);

        let handle = tokio::spawn(async move { client.create_order(pizza()).await });

        let (params, respond_to) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params, pizza());
        respond_to.send(Ok(OrderId(7))).unwrap();

        assert_eq!(handle.await.unwrap(), Ok(OrderId(7)));
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_sent() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(client);

        let mut edits = pizza();
        edits.kind_of_food = " ".into();
        assert!(matches!(
            client.update_order(edits).await,
            Err(OrderError::Validation(_))
        ));

        drop(client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_mark_unknown_order_reports_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(client);

        let handle = tokio::spawn(async move { client.mark_cancelled(OrderId(3)).await });

        let (id, action, respond_to) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(3));
        assert_eq!(action, OrderAction::MarkCancelled);
        respond_to.send(Ok(None)).unwrap();

        assert_eq!(handle.await.unwrap(), Ok(false));
    }
}
