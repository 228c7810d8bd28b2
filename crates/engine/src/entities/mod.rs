//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a host document type.
//! They depend on host ports and provide the building blocks for use cases.

pub mod actor_sheet;

pub use actor_sheet::{coin_updates, ActorSheet};
