use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::notify::Notifier;
use crate::storage::StorageAdapter;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Attempts made to draw an unused ID before a create is rejected.
const MAX_ID_ATTEMPTS: usize = 8;

/// Tunables for a [`ResourceActor`].
#[derive(Debug, Clone)]
pub struct ActorSettings {
    /// Capacity of the request channel. When full, client calls wait for room.
    pub buffer_size: usize,
    /// The single storage key holding the serialized collection.
    pub storage_key: String,
    /// Cosmetic pause before the actor reports itself loaded.
    pub loading_delay: Duration,
}

impl ActorSettings {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            buffer_size: 32,
            storage_key: storage_key.into(),
            loading_delay: Duration::ZERO,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }
}

/// The actor that owns a persisted collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the collection and the
/// receiver end of the channel, and it is the only writer to the storage key.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in one task, so only one mutation is ever
/// in flight and the collection needs no `Mutex`. Clients only ever see cloned
/// snapshots.
///
/// # Lifecycle
///
/// 1. **Load**: the collection is read from storage. A missing key yields an empty
///    collection; a read or parse failure also yields an empty collection and an
///    error notice, never a crash.
/// 2. **Sweep**: [`ActorEntity::on_load`] runs on every loaded record.
/// 3. **Ready**: after the loading delay the `loaded` flag flips, and the
///    collection is written back if the sweep changed anything.
/// 4. **Serve**: each request is handled in arrival order. Every change to the
///    collection (create, successful action, effective delete) is followed by a
///    full write to storage. Write failures are logged and notified, not returned.
///
/// Nothing is persisted before loading finishes, so a slow read can never be
/// overwritten with an empty collection.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    storage: Arc<dyn StorageAdapter>,
    storage_key: String,
    loading_delay: Duration,
    notifier: Notifier,
    loaded: watch::Sender<bool>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `settings` - Channel capacity, storage key and loading delay.
    /// * `storage` - The medium the collection is loaded from and written to.
    /// * `notifier` - Receives load and save failures.
    /// * `next_id_fn` - Generates the ID for each new record.
    pub fn new(
        settings: ActorSettings,
        storage: Arc<dyn StorageAdapter>,
        notifier: Notifier,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(settings.buffer_size.max(1));
        let (loaded, loaded_rx) = watch::channel(false);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
            storage,
            storage_key: settings.storage_key,
            loading_delay: settings.loading_delay,
            notifier,
            loaded,
        };
        let client = ResourceClient::new(sender, loaded_rx);
        (actor, client)
    }

    /// Runs the actor: loads the collection, then processes messages until every
    /// client has been dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "pemesanan::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, key = %self.storage_key, "Actor started");

        let swept = self.load(entity_type, &context).await;
        if !self.loading_delay.is_zero() {
            tokio::time::sleep(self.loading_delay).await;
        }
        let _ = self.loaded.send(true);
        info!(entity_type, size = self.store.len(), swept, "Loaded");
        if swept > 0 {
            self.persist(entity_type);
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(id) = self.fresh_id() else {
                        warn!(entity_type, "No unused id available");
                        let _ = respond_to.send(Err(FrameworkError::IdExhausted));
                        continue;
                    };

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(item) => {
                            self.store.insert(0, item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.persist(entity_type);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(pos) = self.position(&id) else {
                        debug!(entity_type, %id, "Delete skipped, not present");
                        let _ = respond_to.send(Ok(false));
                        continue;
                    };
                    if let Err(e) = self.store[pos].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(pos);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.persist(entity_type);
                    let _ = respond_to.send(Ok(true));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = self.store[pos]
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            info!(entity_type, %id, "Action ok");
                            self.persist(entity_type);
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&self) -> Option<T::Id> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| (self.next_id_fn)())
            .find(|id| self.position(id).is_none())
    }

    /// Reads the collection from storage and runs `on_load` on every record.
    /// Returns how many records the hook changed.
    async fn load(&mut self, entity_type: &str, context: &T::Context) -> usize {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(entity_type, key = %self.storage_key, "Nothing stored yet");
                return 0;
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Load failed");
                self.notifier
                    .error("Gagal memuat data", format!("Riwayat tidak dapat dibaca: {e}"));
                return 0;
            }
        };

        let items: Vec<T> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(entity_type, error = %e, "Stored data is malformed");
                self.notifier
                    .error("Gagal memuat data", format!("Data tersimpan rusak: {e}"));
                return 0;
            }
        };

        let mut seen = HashSet::new();
        let mut changed = 0;
        for mut item in items {
            if !seen.insert(item.id().clone()) {
                warn!(entity_type, id = %item.id(), "Dropping duplicate record");
                continue;
            }
            if item.on_load(context).await {
                changed += 1;
            }
            self.store.push(item);
        }
        changed
    }

    /// Writes the whole collection under the storage key. Failures are reported
    /// through the notifier only.
    fn persist(&self, entity_type: &str) {
        let payload = match serde_json::to_string(&self.store) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(entity_type, error = %e, "Serialization failed");
                self.notifier
                    .error("Gagal menyimpan data", format!("Data tidak dapat diserialisasi: {e}"));
                return;
            }
        };
        match self.storage.set(&self.storage_key, &payload) {
            Ok(()) => debug!(entity_type, size = self.store.len(), "Persisted"),
            Err(e) => {
                warn!(entity_type, error = %e, "Persist failed");
                self.notifier
                    .error("Gagal menyimpan data", format!("Perubahan belum tersimpan: {e}"));
            }
        }
    }
}
