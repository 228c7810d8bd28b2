//! One Piece sheet supplement engine library.
//!
//! Currency conversion, the Hybrid Points pool and the Willpower stat,
//! orchestrated against a host's actor documents.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping host document operations
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - Host ports, adapters, settings and hooks
//! - `api/` - Host event entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
