//! Aggregates coordinating value objects across a user interaction.

mod sheet_transaction;

pub use sheet_transaction::{SheetTransaction, TransactionState};
