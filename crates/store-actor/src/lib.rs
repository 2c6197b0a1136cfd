//! # Store Actor
//!
//! Building blocks for a persisted, single-owner record collection.
//!
//! One [`ResourceActor`] task owns a `Vec` of records, loads it from a
//! [`StorageAdapter`](storage::StorageAdapter) when it starts, and writes the whole
//! collection back after every change. Callers talk to it through a cloneable
//! [`ResourceClient`]; requests are processed one at a time, so there is never more
//! than one mutation in flight and the collection needs no locks.
//!
//! ## Module Tour
//!
//! - [`entity`]: the [`ActorEntity`] contract a record type implements.
//! - [`actor`]: the [`ResourceActor`] loop (load, sweep, serve, persist).
//! - [`client`] / [`client_trait`]: the typed request API and the trait domain
//!   clients build on.
//! - [`storage`]: the key-value adapter trait with file and in-memory media.
//! - [`notify`]: non-blocking user notices for failures that must not propagate.
//! - [`mock`]: expectation-driven clients for tests.
//!
//! ## Failure Model
//!
//! Storage failures never reach the caller. A failed load leaves the collection
//! empty, a failed write leaves storage stale; both are logged with `tracing` and
//! published as an error [`Notice`](notify::Notice).

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod notify;
pub mod storage;

// Re-export core types for convenience
pub use actor::{ActorSettings, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{ResourceRequest, Response};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
