use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every variant carries its own `respond_to` channel so the caller can await the
/// result. The actor handles them strictly one at a time, which is what keeps a
/// single mutation in flight.
///
/// - **Create**: Validates [`ActorEntity::Create`] and prepends the new record.
/// - **Get**: Fetches one record by ID.
/// - **List**: Returns a snapshot of the whole collection, newest first.
/// - **Delete**: Removes a record; absent IDs are a no-op.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
