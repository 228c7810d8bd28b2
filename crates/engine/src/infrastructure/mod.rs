//! Infrastructure - host ports and the adapters behind them.

pub mod hooks;
pub mod memory;
pub mod ports;
pub mod registration;
pub mod settings;
