//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the sheet.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod currency;
pub mod hybrid_points;
pub mod summary;
pub mod transaction;
pub mod willpower;

// Re-export main types
pub use currency::CurrencyUseCases;
pub use hybrid_points::HybridPointsUseCases;
pub use summary::{BuildSheetSummary, SheetSummary};
pub use transaction::{SheetFlow, SheetOperation};
pub use willpower::{UserRole, WillpowerUseCases};
