//! # System Lifecycle
//!
//! Starting, wiring and shutting down the order store.
//!
//! ## The OrderSystem Pattern
//!
//! ```rust,ignore
//! let config = load_config()?;
//! let system = OrderSystem::from_config(&config)?;
//!
//! system.order_client.ready().await?;
//! // ... use the client ...
//! system.shutdown().await?;
//! ```
//!
//! [`OrderSystem::start`] accepts any [`StorageAdapter`](store_actor::StorageAdapter),
//! so tests run the real actor against a
//! [`MemoryStorage`](store_actor::MemoryStorage) and the binary runs it against
//! a [`FileStorage`](store_actor::FileStorage).
//!
//! ## Context Injection
//!
//! The Order actor's `Context` is an [`OrderContext`](crate::order_actor::OrderContext)
//! clock, handed over in `run(context)`. Every timestamp the store writes and the
//! date the past-due sweep compares against come from it.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the actor task to finish
//!
//! The collection is already persisted after every change, so shutdown has
//! nothing left to flush.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the global subscriber; see the [`tracing`] module.

pub mod order_system;
pub mod tracing;

pub use self::order_system::OrderSystem;
pub use self::tracing::setup_tracing;
