//! API layer - entry points the host calls into.

pub mod events;

pub use events::SheetEventHandler;
