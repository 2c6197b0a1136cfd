//! # Entity Contract
//!
//! The [`ActorEntity`] trait is the contract every record type must satisfy to be
//! owned by a [`ResourceActor`](crate::ResourceActor). The actor handles the plumbing
//! (channels, persistence, notifications); the entity supplies the domain rules through
//! associated types and lifecycle hooks.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any persisted record must implement to be managed by `ResourceActor`.
///
/// # Architecture Note
/// The actor keeps the whole collection in memory and writes it back to a
/// [`StorageAdapter`](crate::storage::StorageAdapter) after each change, so an entity
/// must round-trip through JSON (`Serialize + DeserializeOwned`).
///
/// # Async & Context
/// Hooks are `#[async_trait]` and receive the `Context` passed to `run()`. Use it to
/// inject things the entity should not construct itself, such as a clock.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The submitted payload for a new record.
    type Create: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g. a status change).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity, shared by creation and every action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Validate the payload and construct the record.
    ///
    /// Returning `Err` leaves the collection untouched.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called once for every record read from storage during initialization.
    ///
    /// Returns `true` when the record was modified, which makes the actor write the
    /// collection back once loading completes.
    async fn on_load(&mut self, _ctx: &Self::Context) -> bool {
        false
    }

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
