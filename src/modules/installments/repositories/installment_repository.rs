// Due-installment selection against PostgreSQL.
//
// An installment qualifies for billing when it is opened or expired, falls
// due on or before the cutoff date, belongs to a fixed-rate (PRE_FIXADO)
// financing in an eligible securitization tier, and has no regular payment
// issued yet. The query result carries no ordering guarantee.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

use crate::core::{AppError, Result};
use crate::modules::installments::models::{DueInstallment, FinancialInstallment, Financing};

/// Read side of the pipeline: finds installments due for billing.
#[async_trait]
pub trait InstallmentSelector: Send + Sync {
    /// All installments eligible for billing up to `cutoff`, joined with
    /// their financing. Empty when nothing matches; never an error for an
    /// empty match.
    async fn find_due_installments(&self, cutoff: NaiveDate) -> Result<Vec<DueInstallment>>;

    /// One installment with its financing, regardless of eligibility.
    /// Returns `AppError::NotFound` when the id does not exist.
    async fn find_with_financing(&self, installment_id: i64) -> Result<DueInstallment>;
}

/// Installment repository backed by PostgreSQL
pub struct PgInstallmentRepository {
    pool: PgPool,
}

impl PgInstallmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const DUE_INSTALLMENT_COLUMNS: &str = r#"
    fi.id               AS installment_id,
    fi.number           AS installment_number,
    fi.status           AS installment_status,
    fi.amount,
    fi.expire_on,
    fi.paid_at,
    fi.paid_amount,
    fi.provider,
    fi.discount_amount,
    fi.interest_amount,
    fi.securitization   AS installment_securitization,
    fi.financing_id,
    f.identifier,
    f.cet,
    f.installments_number,
    f.interest_fee,
    f.securitization    AS financing_securitization,
    f.status            AS financing_status,
    f.customer_id
"#;

/// Flat row for the installment/financing join
#[derive(Debug, FromRow)]
struct DueInstallmentRow {
    installment_id: i64,
    installment_number: i32,
    installment_status: String,
    amount: i64,
    expire_on: NaiveDate,
    paid_at: Option<DateTime<Utc>>,
    paid_amount: i64,
    provider: String,
    discount_amount: i64,
    interest_amount: i64,
    installment_securitization: Option<String>,
    financing_id: i64,
    identifier: String,
    cet: String,
    installments_number: i32,
    interest_fee: i64,
    financing_securitization: String,
    financing_status: String,
    customer_id: i64,
}

impl From<DueInstallmentRow> for DueInstallment {
    fn from(row: DueInstallmentRow) -> Self {
        DueInstallment {
            installment: FinancialInstallment {
                id: row.installment_id,
                number: row.installment_number,
                status: row.installment_status,
                amount: row.amount,
                expire_on: row.expire_on,
                paid_at: row.paid_at,
                paid_amount: row.paid_amount,
                provider: row.provider,
                discount_amount: row.discount_amount,
                interest_amount: row.interest_amount,
                securitization: row.installment_securitization,
                financing_id: row.financing_id,
            },
            financing: Financing {
                id: row.financing_id,
                identifier: row.identifier,
                cet: row.cet,
                installments_number: row.installments_number,
                interest_fee: row.interest_fee,
                securitization: row.financing_securitization,
                status: row.financing_status,
                customer_id: row.customer_id,
            },
        }
    }
}

#[async_trait]
impl InstallmentSelector for PgInstallmentRepository {
    async fn find_due_installments(&self, cutoff: NaiveDate) -> Result<Vec<DueInstallment>> {
        let sql = format!(
            r#"
            SELECT {DUE_INSTALLMENT_COLUMNS}
            FROM financial_installments fi
            JOIN financings f ON f.id = fi.financing_id
            LEFT JOIN payments p
                ON p.financial_installment_id = fi.id AND p.type = 'regular'
            WHERE fi.status IN ('opened', 'expired')
              AND fi.expire_on <= $1
              AND f.cet = 'PRE_FIXADO'
              AND f.securitization IN ('a1', 'a2', 'a3')
              AND f.status IN ('active', 'disabled')
              AND p.id IS NULL
            "#
        );

        let rows = sqlx::query_as::<_, DueInstallmentRow>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DueInstallment::from).collect())
    }

    async fn find_with_financing(&self, installment_id: i64) -> Result<DueInstallment> {
        let sql = format!(
            r#"
            SELECT {DUE_INSTALLMENT_COLUMNS}
            FROM financial_installments fi
            JOIN financings f ON f.id = fi.financing_id
            WHERE fi.id = $1
            "#
        );

        let row = sqlx::query_as::<_, DueInstallmentRow>(&sql)
            .bind(installment_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(DueInstallment::from).ok_or_else(|| {
            AppError::not_found(format!("financial installment {}", installment_id))
        })
    }
}
