// The installment-to-billet pipeline: select due installments, open a
// batch, then fan out one cooperative task per installment
// (fetch -> build payload -> call provider -> record outcome).
//
// Failure isolation: a task failure is converted into a `failed` ledger
// item and never aborts sibling tasks; a ledger-write failure is logged
// and swallowed. Only a failure to create the batch itself is fatal.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures_util::future::join_all;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::config::CutoffConfig;
use crate::core::dates::cutoff_date;
use crate::core::Result;
use crate::modules::batches::BatchLedger;
use crate::modules::billets::services::payload_builder::PayloadBuilder;
use crate::modules::gateways::{BilletGateway, GatewayResult};
use crate::modules::installments::InstallmentSelector;

/// Returned by one pipeline run. The flag reflects run completion, not
/// per-item success; granular outcomes live in the ledger.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipelineReport {
    pub success: bool,
}

pub struct BillingPipeline {
    selector: Arc<dyn InstallmentSelector>,
    ledger: Arc<dyn BatchLedger>,
    gateway: Arc<dyn BilletGateway>,
    cutoff: CutoffConfig,
}

impl BillingPipeline {
    pub fn new(
        selector: Arc<dyn InstallmentSelector>,
        ledger: Arc<dyn BatchLedger>,
        gateway: Arc<dyn BilletGateway>,
        cutoff: CutoffConfig,
    ) -> Self {
        Self {
            selector,
            ledger,
            gateway,
            cutoff,
        }
    }

    /// Runs one billing pass over every currently eligible installment.
    pub async fn run(&self) -> Result<PipelineReport> {
        let started = Instant::now();

        let cutoff = cutoff_date(Utc::now().date_naive(), self.cutoff.months, self.cutoff.days);
        let due = self.selector.find_due_installments(cutoff).await?;

        // No items can be recorded without a batch id, so this one is fatal
        let batch_id = self.ledger.create_batch().await?;

        info!(
            batch_id,
            eligible = due.len(),
            cutoff = %cutoff,
            "Starting billet creation run"
        );

        let tasks = due
            .iter()
            .map(|d| self.process_installment(batch_id, d.installment.id));
        join_all(tasks).await;

        info!(
            batch_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Billet creation run finished"
        );

        Ok(PipelineReport { success: true })
    }

    /// One installment's build -> call -> record sequence. Never returns
    /// an error: failures become a `failed` ledger item for this
    /// installment and the siblings keep running.
    async fn process_installment(&self, batch_id: i64, installment_id: i64) {
        let result = match self.create_billet(installment_id).await {
            Ok(result) => {
                info!(
                    installment_id,
                    batch_id,
                    status_code = result.status_code,
                    "Billet provider responded"
                );
                result
            }
            Err(err) => {
                error!(
                    installment_id,
                    batch_id,
                    error = %err,
                    "Billet creation task failed"
                );
                GatewayResult::new(0, json!({ "detail": err.to_string() }))
            }
        };

        // Ledger writes are best-effort; the billing outcome already happened
        if let Err(err) = self
            .ledger
            .record_outcome(batch_id, installment_id, &result)
            .await
        {
            error!(
                installment_id,
                batch_id,
                error = %err,
                "Failed to record batch item"
            );
        }
    }

    async fn create_billet(&self, installment_id: i64) -> Result<GatewayResult> {
        let due = self.selector.find_with_financing(installment_id).await?;
        let payload = PayloadBuilder::build(&due.installment, &due.financing)?;
        self.gateway.create_billet(&payload).await
    }
}
