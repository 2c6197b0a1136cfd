//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] implementation that lets a
//! [`ResourceActor`](store_actor::ResourceActor) own the order collection.

use super::actions::{OrderAction, OrderActionResult, StatusOutcome};
use super::context::OrderContext;
use super::error::OrderError;
use crate::model::{Order, OrderInput};
use async_trait::async_trait;
use store_actor::ActorEntity;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderInput;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Validates the payload and builds a waiting order stamped with the
    /// context clock.
    fn from_create_params(
        id: String,
        params: OrderInput,
        ctx: &OrderContext,
    ) -> Result<Self, OrderError> {
        params.check()?;
        Ok(params.into_order(id, ctx.now()))
    }

    /// Past-due sweep, run once per order when the collection is loaded.
    async fn on_load(&mut self, ctx: &OrderContext) -> bool {
        let completed = self.complete_if_past_due(ctx.today(), ctx.now());
        if completed {
            info!(order_id = %self.id, delivery = %self.tanggal_pengiriman, "Order auto-completed");
        }
        completed
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::UpdateStatus { change, by } => {
                let changed = self.change_status(change.into(), &by, ctx.now());
                debug!(order_id = %self.id, status = %self.status, changed, "Status update");
                Ok(OrderActionResult::UpdateStatus(StatusOutcome {
                    changed,
                    status: self.status,
                }))
            }
        }
    }
}
