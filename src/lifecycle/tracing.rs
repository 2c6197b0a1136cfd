//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`). Module paths are hidden (`with_target(false)`);
//! the actor tags its lines with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, load result (`size`, `swept`), shutdown
//! - **Store operations**: create, status updates, deletes, persistence failures
//! - **Client calls**: one span per `OrderClient` method via `#[instrument]`
//! - **Notices**: every notice is logged at `info` or `error` as it is published
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `debug`, client entry points log their payload once:
//!
//! ```text
//! DEBUG add_order{acara="Rapat Koordinasi"}: add_order called input=OrderInput { .. }
//! DEBUG add_order{acara="Rapat Koordinasi"}: Create entity_type="Order" params=OrderInput { .. }
//! INFO add_order{acara="Rapat Koordinasi"}: Created entity_type="Order" id="6f1c…" size=3
//! INFO add_order{acara="Rapat Koordinasi"}: Order added order_id="6f1c…"
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
