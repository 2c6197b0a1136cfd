//! Custom actions for the Order actor.
//!
//! Status changes are the only mutation an existing [`Order`](crate::model::Order)
//! accepts; they are handled by
//! [`ActorEntity::handle_action`](store_actor::ActorEntity::handle_action).

use crate::model::{OrderStatus, StatusChange};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a caller-requested status.
    ///
    /// Appends one history entry when the status actually changes.
    UpdateStatus { change: StatusChange, by: String },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    UpdateStatus(StatusOutcome),
}

/// What a status update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOutcome {
    /// `false` when the order already had the requested status.
    pub changed: bool,
    pub status: OrderStatus,
}
