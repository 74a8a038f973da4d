use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::Result;
use crate::modules::batches::models::{
    BillingBatch, NewBatchItem, BATCH_IDENTIFIER, BATCH_STATUS_PENDING,
};
use crate::modules::gateways::GatewayResult;

/// Write side of the pipeline: the batch/item ledger.
///
/// `create_batch` must succeed (and commit) before any item can be
/// recorded against it. `record_outcome` persists exactly one item per
/// call; callers treat its failure as best-effort and must not abort the
/// run over it.
#[async_trait]
pub trait BatchLedger: Send + Sync {
    /// Insert one batch row for this run and return its id.
    async fn create_batch(&self) -> Result<i64>;

    /// Classify a gateway result and persist it as one batch item.
    async fn record_outcome(
        &self,
        batch_id: i64,
        installment_id: i64,
        result: &GatewayResult,
    ) -> Result<()>;
}

/// Batch ledger backed by PostgreSQL
pub struct PgBatchLedger {
    pool: PgPool,
}

impl PgBatchLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_item(&self, item: &NewBatchItem) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bank_billet_creation_batches_items (
                bank_billet_creation_batch_id, external_id, status,
                financial_installment_id, content, description,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            "#,
        )
        .bind(item.batch_id)
        .bind(item.external_id)
        .bind(item.status.to_string())
        .bind(item.installment_id)
        .bind(&item.content)
        .bind(&item.description)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl BatchLedger for PgBatchLedger {
    async fn create_batch(&self) -> Result<i64> {
        let batch: BillingBatch = sqlx::query_as(
            r#"
            INSERT INTO bank_billet_creation_batches (
                batch_identifier, status, created_at, updated_at
            ) VALUES ($1, $2, now(), now())
            RETURNING id, batch_identifier, status, created_at, updated_at
            "#,
        )
        .bind(BATCH_IDENTIFIER)
        .bind(BATCH_STATUS_PENDING)
        .fetch_one(&self.pool)
        .await?;

        Ok(batch.id)
    }

    async fn record_outcome(
        &self,
        batch_id: i64,
        installment_id: i64,
        result: &GatewayResult,
    ) -> Result<()> {
        let item = NewBatchItem::from_gateway_result(batch_id, installment_id, result);
        self.insert_item(&item).await
    }
}
