//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].

use crate::framework::ActorEntity;
use crate::model::{Order, OrderDraft, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderDraft;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    const SLOT: &'static str = "orders";

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// The current time in milliseconds, or one past `last` if the clock has
    /// not moved beyond it.
    fn next_id(last: Option<&OrderId>) -> Result<OrderId, OrderError> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match last {
            Some(last) if last.0 >= now => last
                .0
                .checked_add(1)
                .map(OrderId)
                .ok_or(OrderError::IdsExhausted(*last)),
            _ => Ok(OrderId(now)),
        }
    }

    /// Creates a new Order from a validated draft. Both flags start false.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, OrderError> {
        draft.validate()?;
        Ok(Order::new(id, draft))
    }

    fn edit_buffer(&self) -> OrderDraft {
        self.draft()
    }

    /// Replaces the six text fields.
    ///
    /// # Validation
    /// Edits are held to the same rule as creation: no field may be blank.
    async fn on_update(&mut self, draft: OrderDraft, _ctx: &()) -> Result<(), OrderError> {
        draft.validate()?;
        self.apply(draft);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        let flag = match action {
            OrderAction::MarkCompleted => &mut self.completed,
            OrderAction::MarkCancelled => &mut self.cancelled,
        };
        let changed = !*flag;
        *flag = true;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            kind_of_food: "Tacos".into(),
            quantity: "3".into(),
            pickup_date_time: "tomorrow 12:30".into(),
            personal_info: "Sam".into(),
            phone_number: "555-0101".into(),
            address: "7 Elm Rd".into(),
        }
    }

    #[test]
    fn test_next_id_tracks_clock() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = Order::next_id(None).unwrap();
        let after = Utc::now().timestamp_millis() as u64;
        assert!(id.0 >= before && id.0 <= after);
    }

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let far_future = OrderId(u64::MAX / 2);
        assert_eq!(Order::next_id(Some(&far_future)), Ok(OrderId(u64::MAX / 2 + 1)));

        let mut last = Order::next_id(None).unwrap();
        for _ in 0..1000 {
            let next = Order::next_id(Some(&last)).unwrap();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_next_id_after_largest_id_is_an_error() {
        let last = OrderId(u64::MAX);
        assert_eq!(Order::next_id(Some(&last)), Err(OrderError::IdsExhausted(last)));
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let mut blank = draft();
        blank.quantity = "  ".into();
        assert!(matches!(
            Order::from_create_params(OrderId(1), blank),
            Err(OrderError::Validation(_))
        ));

        let order = Order::from_create_params(OrderId(1), draft()).unwrap();
        assert!(!order.completed && !order.cancelled);
    }

    #[tokio::test]
    async fn test_flags_are_independent() {
        let mut order = Order::new(OrderId(1), draft());

        assert!(order.handle_action(OrderAction::MarkCompleted, &()).await.unwrap());
        assert!(!order.handle_action(OrderAction::MarkCompleted, &()).await.unwrap());
        assert!(order.handle_action(OrderAction::MarkCancelled, &()).await.unwrap());
        assert!(order.completed && order.cancelled);
    }

    #[tokio::test]
    async fn test_rejected_edit_leaves_order_untouched() {
        let mut order = Order::new(OrderId(1), draft());
        let mut edits = draft();
        edits.address = String::new();

        assert!(order.on_update(edits, &()).await.is_err());
        assert_eq!(order.draft(), draft());
    }
}
