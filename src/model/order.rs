use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of an order: the creation time in milliseconds since the Unix
/// epoch, bumped past the previous id when two orders land in the same
/// millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(OrderId)
    }
}

/// A food order on the board.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation and edit payload ([`OrderDraft`])
/// - Status transitions ([`OrderAction`](crate::order_actor::OrderAction))
///
/// Field names on the wire are camelCase (`kindOfFood`, `pickupDateTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub kind_of_food: String,
    pub quantity: String,
    pub pickup_date_time: String,
    pub personal_info: String,
    pub phone_number: String,
    pub address: String,
    // Older snapshots predate these flags
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub cancelled: bool,
}

impl Order {
    /// Creates a fresh order: neither completed nor cancelled.
    pub fn new(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            kind_of_food: draft.kind_of_food,
            quantity: draft.quantity,
            pickup_date_time: draft.pickup_date_time,
            personal_info: draft.personal_info,
            phone_number: draft.phone_number,
            address: draft.address,
            completed: false,
            cancelled: false,
        }
    }

    /// Copy of the six text fields.
    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            kind_of_food: self.kind_of_food.clone(),
            quantity: self.quantity.clone(),
            pickup_date_time: self.pickup_date_time.clone(),
            personal_info: self.personal_info.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }

    /// Overwrites the six text fields. Identity and status flags are kept.
    pub fn apply(&mut self, draft: OrderDraft) {
        self.kind_of_food = draft.kind_of_food;
        self.quantity = draft.quantity;
        self.pickup_date_time = draft.pickup_date_time;
        self.personal_info = draft.personal_info;
        self.phone_number = draft.phone_number;
        self.address = draft.address;
    }

    /// Neither completed nor cancelled.
    pub fn is_pending(&self) -> bool {
        !self.completed && !self.cancelled
    }

    /// Shown among completed orders: completed and not cancelled.
    pub fn is_completed_display(&self) -> bool {
        self.completed && !self.cancelled
    }

    /// Display status. Cancellation wins over completion.
    pub fn status(&self) -> OrderStatus {
        if self.cancelled {
            OrderStatus::Cancelled
        } else if self.completed {
            OrderStatus::Completed
        } else {
            OrderStatus::Pending
        }
    }
}

/// Display status derived from the two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// The editable text of an order. Payload for creation, for edits, and the
/// edit buffer seeded when an order is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub kind_of_food: String,
    pub quantity: String,
    pub pickup_date_time: String,
    pub personal_info: String,
    pub phone_number: String,
    pub address: String,
}

impl OrderDraft {
    /// Fields that are empty once surrounding whitespace is trimmed, in form
    /// order.
    pub fn missing_fields(&self) -> Vec<OrderField> {
        [
            (OrderField::KindOfFood, &self.kind_of_food),
            (OrderField::Quantity, &self.quantity),
            (OrderField::PickupDateTime, &self.pickup_date_time),
            (OrderField::PersonalInfo, &self.personal_info),
            (OrderField::PhoneNumber, &self.phone_number),
            (OrderField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Every field must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Names of the six required text fields, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    KindOfFood,
    Quantity,
    PickupDateTime,
    PersonalInfo,
    PhoneNumber,
    Address,
}

impl Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderField::KindOfFood => "kindOfFood",
            OrderField::Quantity => "quantity",
            OrderField::PickupDateTime => "pickupDateTime",
            OrderField::PersonalInfo => "personalInfo",
            OrderField::PhoneNumber => "phoneNumber",
            OrderField::Address => "address",
        };
        f.write_str(name)
    }
}

/// A draft with one or more blank fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("please fill out all order information (missing: {})", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<OrderField>,
}

fn join_fields(fields: &[OrderField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_complete_draft_is_valid() {
        assert_eq!(pizza().validate(), Ok(()));
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut draft = pizza();
        draft.phone_number = " \t ".into();
        draft.address = String::new();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec![OrderField::PhoneNumber, OrderField::Address]);
        assert_eq!(
            err.to_string(),
            "please fill out all order information (missing: phoneNumber, address)"
        );
    }

    #[test]
    fn test_default_draft_misses_everything() {
        assert_eq!(OrderDraft::default().missing_fields().len(), 6);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let order = Order::new(OrderId(1700000000000), pizza());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1700000000000u64,
                "kindOfFood": "Pizza",
                "quantity": "2",
                "pickupDateTime": "18:00",
                "personalInfo": "Jo",
                "phoneNumber": "555",
                "address": "1 Main St",
                "completed": false,
                "cancelled": false
            })
        );
    }

    #[test]
    fn test_snapshot_without_cancelled_flag_loads() {
        let json = r#"{"id":5,"kindOfFood":"Soup","quantity":"1","pickupDateTime":"noon",
            "personalInfo":"Al","phoneNumber":"1","address":"here","completed":true}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId(5));
        assert!(order.completed);
        assert!(!order.cancelled);
    }

    #[test]
    fn test_apply_keeps_identity_and_flags() {
        let mut order = Order::new(OrderId(9), pizza());
        order.completed = true;

        let mut edits = pizza();
        edits.kind_of_food = "Calzone".into();
        order.apply(edits.clone());

        assert_eq!(order.id, OrderId(9));
        assert!(order.completed);
        assert!(!order.cancelled);
        assert_eq!(order.draft(), edits);
    }

    #[test]
    fn test_status_prefers_cancelled() {
        let mut order = Order::new(OrderId(1), pizza());
        assert_eq!(order.status(), OrderStatus::Pending);
        order.completed = true;
        assert_eq!(order.status(), OrderStatus::Completed);
        order.cancelled = true;
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(!order.is_completed_display());
        assert!(!order.is_pending());
    }

    #[test]
    fn test_order_id_parses_from_text() {
        assert_eq!(" 42 ".parse::<OrderId>(), Ok(OrderId(42)));
        assert!("abc".parse::<OrderId>().is_err());
    }
}
