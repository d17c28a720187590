//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); the actor tags every event with `entity_type`
//! instead. The filter comes from `RUST_LOG` when it is set, otherwise from
//! the directive passed in (the CLI's `--log-level`).
//!
//! ```bash
//! # Lifecycle and mutations
//! RUST_LOG=info order_desk list
//!
//! # Full payloads and reads
//! RUST_LOG=debug order_desk create ...
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle** (`info`): started, restored, shutdown with final size
//! - **Mutations** (`info`): created, updated, deleted, action ok, purged
//! - **Payloads and reads** (`debug`): drafts, edits, get, list, selection
//! - **Soft failures** (`warn`): corrupt snapshot, failed persistence,
//!   rejected drafts
//!
//! With `RUST_LOG=info`, creating and then cancelling an order looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order" slot="orders"
//! INFO No snapshot, starting empty entity_type="Order" slot="orders"
//! INFO create_order: Sending create_order to actor
//! INFO Created entity_type="Order" id=1718000000000 size=1
//! INFO Action ok entity_type="Order" id=1718000000000
//! INFO Shutdown entity_type="Order" size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_directive` (e.g. `"info"` or
/// `"order_desk=debug"`) applies when `RUST_LOG` is unset or invalid.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
