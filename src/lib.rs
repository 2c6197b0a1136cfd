//! # Pemesanan
//!
//! An order store for consumption (catering) requests: requesters submit
//! orders, an admin approves or rejects them, and every order keeps an
//! append-only history of its status changes.
//!
//! ## Architecture
//!
//! The collection is owned by a single [`ResourceActor`](store_actor::ResourceActor)
//! task from the `store-actor` crate. It loads the collection from a
//! [`StorageAdapter`](store_actor::StorageAdapter) on start, completes past-due
//! orders, and writes the whole collection back after every change. Callers go
//! through the cloneable [`OrderClient`](clients::OrderClient); requests are
//! handled one at a time, so there is never more than one mutation in flight.
//!
//! Failures that must not interrupt the user (storage trouble, empty exports,
//! rejected input) are published as [`Notice`](store_actor::Notice)s on the
//! system's [`Notifier`](store_actor::Notifier) and logged with `tracing`.
//!
//! ## Module Tour
//!
//! - [`model`]: [`Order`](model::Order), its status and history, and the
//!   validated [`OrderInput`](model::OrderInput).
//! - [`order_actor`]: the entity implementation, status actions and the clock context.
//! - [`clients`]: [`OrderClient`](clients::OrderClient), the domain API.
//! - [`view`]: status counts and the filtered, sorted list.
//! - [`export`]: CSV rendering and the export file.
//! - [`dashboard`]: selection, view mode and two-step delete confirmation.
//! - [`config`]: layered configuration.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) and tracing setup.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod view;
