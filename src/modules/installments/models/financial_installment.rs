// A financial installment is one scheduled payment obligation inside a
// financing contract. Rows are created and settled by upstream services;
// this pipeline only reads them to decide what to invoice.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One scheduled payment obligation of a financing contract.
///
/// `status` is an upstream-owned vocabulary (`opened`, `expired`, `paid`,
/// ...); the selector only ever filters on the values it cares about, so
/// it is kept as a plain string rather than an enum we would have to
/// chase upstream changes for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FinancialInstallment {
    pub id: i64,
    pub number: i32,
    pub status: String,
    /// Integer amount kept at its native precision; passed through to
    /// the billet provider untouched
    pub amount: i64,
    pub expire_on: NaiveDate,
    pub paid_at: Option<DateTime<Utc>>,
    pub paid_amount: i64,
    pub provider: String,
    pub discount_amount: i64,
    pub interest_amount: i64,
    pub securitization: Option<String>,
    pub financing_id: i64,
}
