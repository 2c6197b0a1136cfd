//! # Order Actor
//!
//! The single owner of the order collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for status changes
//! - [`context`] - [`OrderContext`], the clock injected at `run` time
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let storage = Arc::new(MemoryStorage::new());
//! let context = OrderContext::system();
//! let (actor, client) = order_actor::new(
//!     ActorSettings::new("pemesanan_data"),
//!     storage,
//!     Notifier::default(),
//!     context.clone(),
//! );
//! tokio::spawn(actor.run(context));
//!
//! client.ready().await?;
//! let id = client.add_order(input).await?;
//! client.approve(&id, "Admin").await?;
//! ```

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use std::sync::Arc;
use store_actor::{ActorSettings, Notifier, ResourceActor, StorageAdapter};

/// Fresh random order id.
pub fn next_order_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a new Order actor and its client.
///
/// The actor must be started with `actor.run(context)`; the client keeps its own
/// copy of the context for export file names.
pub fn new(
    settings: ActorSettings,
    storage: Arc<dyn StorageAdapter>,
    notifier: Notifier,
    context: OrderContext,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::new(settings, storage, notifier.clone(), next_order_id);
    let client = OrderClient::new(generic_client, notifier, context);
    (actor, client)
}
