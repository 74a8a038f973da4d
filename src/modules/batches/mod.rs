// Batch ledger module

pub mod models;
pub mod repositories;

pub use models::{BatchItemStatus, BillingBatch, NewBatchItem};
pub use repositories::{BatchLedger, PgBatchLedger};
