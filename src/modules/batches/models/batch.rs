use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One pipeline run. Created once at the start of a run with a fixed
/// placeholder identifier; items reference it by id. The status stays
/// `pending` for the lifetime of the row — the run does not transition
/// it to a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BillingBatch {
    pub id: i64,
    pub batch_identifier: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status a batch row is created with
pub const BATCH_STATUS_PENDING: &str = "pending";

/// Placeholder identifier stamped on every batch row
pub const BATCH_IDENTIFIER: &str = "xpto-billet-batch";
