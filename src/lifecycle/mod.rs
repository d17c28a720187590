//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the order store.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem`] builds the storage backend, spawns the store actor in its
//! own Tokio task and hands out the [`OrderClient`](crate::clients::OrderClient):
//!
//! ```rust,ignore
//! let config = AppConfig::from_file("order_desk.toml").await?;
//! let system = OrderSystem::from_config(&config)?;
//!
//! let id = system.order_client.create_order(draft).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Shutdown is cooperative: dropping the last client closes the request
//! channel, the actor drains what is queued, logs its final size and exits.
//! [`OrderSystem::shutdown`] waits for that to happen.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber once per process. See the
//! [`tracing`](self::tracing) module for the log layout.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
