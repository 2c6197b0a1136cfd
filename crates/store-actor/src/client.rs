use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot, watch};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async API for interacting with a
/// `ResourceActor<T>`. It forwards requests over a Tokio mpsc channel and returns
/// results via oneshot channels. Cloning only copies the sender and the loading
/// flag, so it can be shared freely across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    loaded: watch::Receiver<bool>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>, loaded: watch::Receiver<bool>) -> Self {
        Self { sender, loaded }
    }

    /// Whether the actor is still reading its collection from storage.
    pub fn is_loading(&self) -> bool {
        !*self.loaded.borrow()
    }

    /// Waits until the actor has finished its initial load.
    pub async fn ready(&self) -> Result<(), FrameworkError> {
        let mut loaded = self.loaded.clone();
        loaded
            .wait_for(|done| *done)
            .await
            .map(|_| ())
            .map_err(|_| FrameworkError::ActorClosed)
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Removes a record. Resolves to `false` when the ID was not present.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
