// End-to-end pipeline runs against in-memory selector/ledger/gateway
// doubles. Exercises the fan-out, failure isolation and best-effort
// ledger semantics without a database or network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use billetflow::config::CutoffConfig;
use billetflow::core::{AppError, Result};
use billetflow::modules::batches::{BatchItemStatus, BatchLedger, NewBatchItem};
use billetflow::modules::billets::{BilletPayload, BillingPipeline};
use billetflow::modules::gateways::{BilletGateway, GatewayResult};
use billetflow::modules::installments::{
    DueInstallment, FinancialInstallment, Financing, InstallmentSelector,
};

const TRANSPORT_FAILURE_CUSTOMER: i64 = 666;
const REJECTED_CUSTOMER: i64 = 422;

fn due_installment(id: i64, number: i32, customer_id: i64) -> DueInstallment {
    DueInstallment {
        installment: FinancialInstallment {
            id,
            number,
            status: "opened".to_string(),
            amount: 1500,
            expire_on: NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date"),
            paid_at: None,
            paid_amount: 0,
            provider: "xpto".to_string(),
            discount_amount: 0,
            interest_amount: 0,
            securitization: Some("a1".to_string()),
            financing_id: 42,
        },
        financing: Financing {
            id: 42,
            identifier: "FIN-0042".to_string(),
            cet: "PRE_FIXADO".to_string(),
            installments_number: 48,
            interest_fee: 0,
            securitization: "a1".to_string(),
            status: "active".to_string(),
            customer_id,
        },
    }
}

struct StubSelector {
    due: Vec<DueInstallment>,
}

#[async_trait]
impl InstallmentSelector for StubSelector {
    async fn find_due_installments(&self, _cutoff: NaiveDate) -> Result<Vec<DueInstallment>> {
        Ok(self.due.clone())
    }

    async fn find_with_financing(&self, installment_id: i64) -> Result<DueInstallment> {
        self.due
            .iter()
            .find(|d| d.installment.id == installment_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("financial installment {}", installment_id)))
    }
}

#[derive(Default)]
struct RecordingLedger {
    batches: Mutex<Vec<i64>>,
    items: Mutex<Vec<NewBatchItem>>,
    refuse_writes: bool,
}

impl RecordingLedger {
    fn items(&self) -> Vec<NewBatchItem> {
        self.items.lock().expect("ledger lock").clone()
    }

    fn batch_count(&self) -> usize {
        self.batches.lock().expect("ledger lock").len()
    }
}

#[async_trait]
impl BatchLedger for RecordingLedger {
    async fn create_batch(&self) -> Result<i64> {
        let mut batches = self.batches.lock().expect("ledger lock");
        let batch_id = 100 + batches.len() as i64;
        batches.push(batch_id);
        Ok(batch_id)
    }

    async fn record_outcome(
        &self,
        batch_id: i64,
        installment_id: i64,
        result: &GatewayResult,
    ) -> Result<()> {
        if self.refuse_writes {
            return Err(AppError::internal("ledger write refused"));
        }

        let item = NewBatchItem::from_gateway_result(batch_id, installment_id, result);
        self.items.lock().expect("ledger lock").push(item);
        Ok(())
    }
}

/// Routes responses by customer id: one customer always fails at the
/// transport level, one is rejected by the provider, the rest succeed.
struct StubGateway;

#[async_trait]
impl BilletGateway for StubGateway {
    async fn create_billet(&self, payload: &BilletPayload) -> Result<GatewayResult> {
        match payload.customer_id {
            TRANSPORT_FAILURE_CUSTOMER => Err(AppError::GatewayTransport(
                "connection refused".to_string(),
            )),
            REJECTED_CUSTOMER => Ok(GatewayResult::new(422, json!({ "erros": ["invalid"] }))),
            _ => Ok(GatewayResult::new(
                201,
                json!({ "id": payload.customer_id, "description": "ok" }),
            )),
        }
    }
}

fn pipeline(
    due: Vec<DueInstallment>,
    ledger: Arc<RecordingLedger>,
) -> BillingPipeline {
    BillingPipeline::new(
        Arc::new(StubSelector { due }),
        ledger,
        Arc::new(StubGateway),
        CutoffConfig { months: 1, days: 0 },
    )
}

#[tokio::test]
async fn test_empty_eligible_set_creates_batch_with_zero_items() {
    let ledger = Arc::new(RecordingLedger::default());
    let report = pipeline(vec![], ledger.clone()).run().await.expect("run");

    assert!(report.success);
    assert_eq!(ledger.batch_count(), 1);
    assert!(ledger.items().is_empty());
}

#[tokio::test]
async fn test_every_eligible_installment_yields_one_item_in_the_run_batch() {
    let ledger = Arc::new(RecordingLedger::default());
    let due = vec![
        due_installment(1, 1, 10),
        due_installment(2, 2, 11),
        due_installment(3, 3, 12),
    ];

    let report = pipeline(due, ledger.clone()).run().await.expect("run");

    assert!(report.success);
    let items = ledger.items();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.batch_id == 100));
    assert!(items.iter().all(|i| i.status == BatchItemStatus::Done));

    let mut recorded: Vec<i64> = items.iter().map(|i| i.installment_id).collect();
    recorded.sort_unstable();
    assert_eq!(recorded, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_payload_build_failure_does_not_abort_siblings() {
    let ledger = Arc::new(RecordingLedger::default());
    // Installment number 1000 cannot fit the 3-digit document number
    let due = vec![
        due_installment(1, 1, 10),
        due_installment(2, 1000, 11),
        due_installment(3, 3, 12),
    ];

    let report = pipeline(due, ledger.clone()).run().await.expect("run");

    assert!(report.success);
    let items = ledger.items();
    assert_eq!(items.len(), 3);

    let failed: Vec<_> = items
        .iter()
        .filter(|i| i.status == BatchItemStatus::Failed)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].installment_id, 2);
    let description = failed[0].description.clone().expect("failure description");
    assert!(description.contains("3-digit"));
}

#[tokio::test]
async fn test_transport_failure_is_recorded_as_failed_item() {
    let ledger = Arc::new(RecordingLedger::default());
    let due = vec![
        due_installment(1, 1, TRANSPORT_FAILURE_CUSTOMER),
        due_installment(2, 2, 10),
    ];

    let report = pipeline(due, ledger.clone()).run().await.expect("run");

    assert!(report.success);
    let items = ledger.items();
    assert_eq!(items.len(), 2);

    let failed = items
        .iter()
        .find(|i| i.installment_id == 1)
        .expect("item recorded");
    assert_eq!(failed.status, BatchItemStatus::Failed);
    let description = failed.description.clone().expect("failure description");
    assert!(description.contains("connection refused"));
    // The error detail is the content snapshot for synthesized failures
    assert!(failed.content.get("detail").is_some());
}

#[tokio::test]
async fn test_provider_rejection_is_recorded_with_error_detail() {
    let ledger = Arc::new(RecordingLedger::default());
    let due = vec![due_installment(1, 1, REJECTED_CUSTOMER)];

    pipeline(due, ledger.clone()).run().await.expect("run");

    let items = ledger.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].status, BatchItemStatus::Failed);
    assert_eq!(items[0].external_id, None);
    let description = items[0].description.clone().expect("failure description");
    assert!(description.contains("invalid"));
}

#[tokio::test]
async fn test_ledger_write_failure_is_swallowed() {
    let ledger = Arc::new(RecordingLedger {
        refuse_writes: true,
        ..RecordingLedger::default()
    });
    let due = vec![due_installment(1, 1, 10), due_installment(2, 2, 11)];

    let report = pipeline(due, ledger.clone()).run().await.expect("run");

    // Ledger writes are best-effort: the run completes anyway
    assert!(report.success);
    assert_eq!(ledger.batch_count(), 1);
    assert!(ledger.items().is_empty());
}

#[tokio::test]
async fn test_rerun_uses_a_fresh_batch_id() {
    let ledger = Arc::new(RecordingLedger::default());
    let pipeline = pipeline(vec![due_installment(1, 1, 10)], ledger.clone());

    pipeline.run().await.expect("first run");
    pipeline.run().await.expect("second run");

    assert_eq!(ledger.batch_count(), 2);
    let items = ledger.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].batch_id, 100);
    assert_eq!(items[1].batch_id, 101);
}
