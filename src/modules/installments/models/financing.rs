use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A multi-installment financing contract. Read-only to this pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Financing {
    pub id: i64,
    /// Human-facing contract identifier, embedded in billet tags
    pub identifier: String,
    /// Rate type; `PRE_FIXADO` marks a fixed-rate contract
    pub cet: String,
    pub installments_number: i32,
    pub interest_fee: i64,
    /// Securitization tier gating billing eligibility (a1/a2/a3/...)
    pub securitization: String,
    pub status: String,
    pub customer_id: i64,
}
