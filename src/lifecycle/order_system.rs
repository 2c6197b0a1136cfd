use crate::clients::OrderClient;
use crate::config::AppConfig;
use crate::order_actor::{self, OrderContext};
use std::sync::Arc;
use store_actor::{ActorSettings, FileStorage, Notifier, StorageAdapter, StorageError};
use tracing::{error, info};

/// The runtime orchestrator for the order store.
///
/// `OrderSystem` owns the running Order actor and hands out its client and the
/// notifier every user-facing notice goes through.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::start(
///     Arc::new(MemoryStorage::new()),
///     ActorSettings::new("pemesanan_data"),
///     OrderContext::system(),
/// );
/// let mut notices = system.notifier.subscribe();
///
/// let id = system.order_client.add_order(input).await?;
/// system.order_client.approve(&id, "Admin").await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Source of success, info and error notices
    pub notifier: Notifier,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Creates the Order actor over `storage` and spawns it.
    ///
    /// Loading starts immediately; use [`OrderClient::ready`] to wait for it.
    pub fn start(
        storage: Arc<dyn StorageAdapter>,
        settings: ActorSettings,
        context: OrderContext,
    ) -> Self {
        let notifier = Notifier::default();
        let (actor, order_client) =
            order_actor::new(settings, storage, notifier.clone(), context.clone());
        let handle = tokio::spawn(actor.run(context));

        Self {
            order_client,
            notifier,
            handle,
        }
    }

    /// Starts the system over file storage as described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = FileStorage::open(config.storage_dir.clone())?;
        info!(dir = %storage.root().display(), "File storage opened");
        Ok(Self::start(
            Arc::new(storage),
            config.actor_settings(),
            OrderContext::system(),
        ))
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the actor's channel, then waits for the
    /// actor task. Returns an error if the task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
