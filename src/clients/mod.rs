//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod order_client;

pub use crate::framework::ActorClient;
pub use order_client::*;
