//! Billetflow billing microservice library
//!
//! Finds financial installments due for invoicing, builds billet requests
//! for the external billing provider, and records every outcome into a
//! batch/item ledger.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::batches;
pub use modules::billets;
pub use modules::gateways;
pub use modules::installments;
