//! Read-only projections of the order collection.
//!
//! Views are recomputed on every call from whatever slice they are given and
//! never reorder it: each keeps the collection order of the orders it admits.
//! An order that is both completed and cancelled counts as cancelled.

use crate::model::Order;

/// The filtered views the order board displays.
#[derive(Debug, Clone, Copy)]
pub struct OrderViews<'a> {
    orders: &'a [Order],
}

impl<'a> OrderViews<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    /// Every order.
    pub fn all(&self) -> Vec<&'a Order> {
        self.orders.iter().collect()
    }

    /// Neither completed nor cancelled.
    pub fn pending(&self) -> Vec<&'a Order> {
        self.select(Order::is_pending)
    }

    /// Cancelled, whether or not also completed.
    pub fn cancelled(&self) -> Vec<&'a Order> {
        self.select(|order| order.cancelled)
    }

    /// Completed and not cancelled.
    pub fn completed_display(&self) -> Vec<&'a Order> {
        self.select(Order::is_completed_display)
    }

    fn select(&self, keep: impl Fn(&Order) -> bool) -> Vec<&'a Order> {
        self.orders.iter().filter(|order| keep(order)).collect()
    }
}
