//! Port traits for host boundaries.
//!
//! The host owns every actor document. The engine reads and writes them only
//! through these ports, so the in-memory adapter and test mocks can stand in
//! for the real host.

mod error;
mod host;

pub use error::PortError;
pub use host::{flag_path, ActorDocumentPort, FieldUpdates, PreUpdateInterceptor};

#[cfg(test)]
pub use host::MockActorDocumentPort;
