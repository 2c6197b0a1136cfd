//! Type-safe wrappers around the generic actor clients.

pub mod order_client;

pub use order_client::OrderClient;
