pub mod batch;
pub mod batch_item;

pub use batch::{BillingBatch, BATCH_IDENTIFIER, BATCH_STATUS_PENDING};
pub use batch_item::{BatchItemStatus, NewBatchItem};
