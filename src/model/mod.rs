//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod order;

pub use order::*;
