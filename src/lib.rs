//! # Order Desk
//!
//! > **An order board for a food counter, built as a resource-oriented actor.**
//!
//! Orders are placed, edited, completed, cancelled and cleared out through a
//! single store actor that owns the collection, issues ids and rewrites a JSON
//! snapshot after every change. Views over the collection (pending,
//! cancelled, completed) are derived on demand.
//!
//! ## Core Concepts
//!
//! ### Generics: The Power of `T`
//! [`ResourceActor<T: ActorEntity>`](framework::ResourceActor) holds the message
//! loop, id issuing, selection and persistence once; [`Order`](model::Order)
//! only supplies its validation and status transitions through the
//! [`ActorEntity`](framework::ActorEntity) trait.
//!
//! ### Mocking: Testing without Pain
//! Client code can be tested without spawning the store. See the
//! [`framework::mock`] module.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`StorageError`](storage::StorageError),
//! [`FrameworkError`](framework::FrameworkError), [`OrderError`](order_actor::OrderError)
//! and [`ConfigError`](config::ConfigError). Unknown ids are not errors;
//! they come back as `false` or `None`.
//!
//! ### 2. Concurrency Model
//! The store runs in its own Tokio task and processes requests one at a
//! time, so the collection needs no locks and ids stay unique even when many
//! clients create orders in the same millisecond. A request is answered only
//! after its snapshot write has finished.
//!
//! ### 3. Persistence
//! The snapshot lives in the `"orders"` slot of a
//! [`StorageInterface`](storage::StorageInterface) backend, in memory or as a
//! JSON file. A missing or corrupt snapshot starts the store empty; a failed
//! write rolls the change back.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic `ResourceActor<T>`, its client and the mocks
//! - [`model`]: [`Order`](model::Order), [`OrderDraft`](model::OrderDraft) and validation
//! - [`order_actor`]: the `ActorEntity` implementation, actions and errors for orders
//! - [`clients`]: [`OrderClient`](clients::OrderClient), the typed boundary callers use
//! - [`views`]: read-only projections for display
//! - [`storage`]: the storage port with memory and file backends
//! - [`config`]: TOML configuration
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) startup and shutdown, tracing setup
//!
//! ## Running the CLI
//!
//! ```bash
//! order_desk create --food Pizza --quantity 2 --pickup 18:00 \
//!     --name Jo --phone 555 --address "1 Main St"
//! order_desk list --view pending
//! RUST_LOG=info order_desk cancel 1718000000000
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod storage;
pub mod views;
