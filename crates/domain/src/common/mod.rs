//! Common utility functions shared by the domain and the engine.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Lenient on input** - host records are duck-typed JSON, so readers
//!   coerce instead of failing

pub mod numeric;
pub mod path;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{
    clamp, finite_number, floor_to_int, group_thousands, lenient_int, lenient_number,
};
pub use path::{get_path, set_path};
