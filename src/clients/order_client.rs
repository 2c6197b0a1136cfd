//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`, maps framework errors to [`OrderError`]
//! and publishes a [`Notice`](store_actor::Notice) for every user-facing outcome.

use crate::export;
use crate::model::{Order, OrderInput, StatusChange};
use crate::order_actor::{OrderAction, OrderActionResult, OrderContext, OrderError, StatusOutcome};
use crate::view::{self, Dashboard, OrderQuery};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use store_actor::{ActorClient, FrameworkError, Notifier, ResourceClient};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    notifier: Notifier,
    context: OrderContext,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, notifier: Notifier, context: OrderContext) -> Self {
        Self {
            inner,
            notifier,
            context,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether the initial load is still running.
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    /// Waits for the initial load (and past-due sweep) to finish.
    pub async fn ready(&self) -> Result<(), OrderError> {
        self.inner.ready().await.map_err(Self::map_error)
    }

    /// Submits a new request. Returns the generated id.
    ///
    /// A rejected payload leaves the collection unchanged and raises an error
    /// notice carrying the first validation message.
    #[instrument(skip(self, input), fields(acara = %input.acara))]
    pub async fn add_order(&self, input: OrderInput) -> Result<String, OrderError> {
        debug!(?input, "add_order called");
        match self.inner.create(input).await.map_err(Self::map_error) {
            Ok(id) => {
                info!(order_id = %id, "Order added");
                self.notifier
                    .success("Pesanan Berhasil", "Pesanan konsumsi berhasil diajukan");
                Ok(id)
            }
            Err(OrderError::Validation { field, message }) => {
                warn!(%field, %message, "Order rejected");
                self.notifier.error("Validasi Gagal", message.clone());
                Err(OrderError::Validation { field, message })
            }
            Err(e) => Err(e),
        }
    }

    /// Requests a status change on behalf of `by`.
    ///
    /// Setting the status an order already has is not an error: nothing is
    /// recorded, but the caller is still notified.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        change: StatusChange,
        by: &str,
    ) -> Result<StatusOutcome, OrderError> {
        let action = OrderAction::UpdateStatus {
            change,
            by: by.to_string(),
        };
        let OrderActionResult::UpdateStatus(outcome) = self
            .inner
            .perform_action(id.to_string(), action)
            .await
            .map_err(Self::map_error)?;

        info!(order_id = %id, status = %outcome.status, changed = outcome.changed, "Status updated");
        self.notifier.success(
            "Status Diperbarui",
            format!("Status pesanan: {}", outcome.status.label()),
        );
        Ok(outcome)
    }

    pub async fn approve(&self, id: &str, by: &str) -> Result<StatusOutcome, OrderError> {
        self.update_status(id, StatusChange::Approved, by).await
    }

    pub async fn reject(&self, id: &str, by: &str) -> Result<StatusOutcome, OrderError> {
        self.update_status(id, StatusChange::Rejected, by).await
    }

    pub async fn cancel(&self, id: &str, by: &str) -> Result<StatusOutcome, OrderError> {
        self.update_status(id, StatusChange::Cancelled, by).await
    }

    /// Removes an order. Resolves to `false` when no order had that id.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &str) -> Result<bool, OrderError> {
        let removed = self
            .inner
            .delete(id.to_string())
            .await
            .map_err(Self::map_error)?;
        if removed {
            self.notifier
                .success("Pesanan Dihapus", "Pesanan berhasil dihapus");
        } else {
            debug!(order_id = %id, "Delete of unknown order ignored");
        }
        Ok(removed)
    }

    /// Status counts over the whole collection plus the visible list.
    pub async fn dashboard(&self, query: &OrderQuery) -> Result<Dashboard, OrderError> {
        let orders = self.list().await?;
        Ok(view::dashboard(&orders, query))
    }

    /// Writes the visible list as CSV into `dir`.
    ///
    /// An empty view produces an info notice and no file.
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub async fn export_csv(
        &self,
        query: &OrderQuery,
        dir: &Path,
    ) -> Result<Option<PathBuf>, OrderError> {
        let orders = self.list().await?;
        let visible = view::filter_and_sort(&orders, query);
        if visible.is_empty() {
            self.notifier
                .info("Tidak Ada Data", "Tidak ada data untuk diekspor");
            return Ok(None);
        }

        match export::write_csv(dir, &visible, self.context.today()) {
            Ok(path) => {
                self.notifier
                    .success("Ekspor Berhasil", format!("{} pesanan diekspor", visible.len()));
                Ok(path)
            }
            Err(e) => {
                self.notifier.error("Ekspor Gagal", e.to_string());
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
