//! Custom actions for the Order actor.

/// Status transitions. The flags are independent: either may be set at any
/// time, and setting one never clears the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    MarkCompleted,
    MarkCancelled,
}

/// Whether the action changed the order (`false` if the flag was already set).
pub type OrderActionResult = bool;
