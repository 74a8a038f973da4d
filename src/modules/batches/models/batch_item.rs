// One ledger row per installment attempted within a batch, written after
// the provider call completes and never updated afterward.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::gateways::GatewayResult;

/// Outcome recorded for one installment attempt. Stored as its lowercase
/// display form in the ledger's varchar status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchItemStatus {
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "failed")]
    Failed,
}

impl std::fmt::Display for BatchItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchItemStatus::Done => write!(f, "done"),
            BatchItemStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A batch item ready to be persisted. Content is always attached: it is
/// the raw provider response (or the error detail for task failures).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBatchItem {
    pub batch_id: i64,
    pub installment_id: i64,
    pub status: BatchItemStatus,
    pub external_id: Option<i64>,
    pub description: Option<String>,
    pub content: Value,
}

impl NewBatchItem {
    /// Classifies a gateway result into a ledger item.
    ///
    /// 201 means the provider accepted the billet: the item is `done` and
    /// carries the provider's billet id and description. Anything else is
    /// `failed`, described by the provider's `erros` list when present,
    /// falling back to its `detail` field.
    pub fn from_gateway_result(
        batch_id: i64,
        installment_id: i64,
        result: &GatewayResult,
    ) -> Self {
        if result.is_created() {
            NewBatchItem {
                batch_id,
                installment_id,
                status: BatchItemStatus::Done,
                external_id: result.content.get("id").and_then(Value::as_i64),
                description: result.content.get("description").map(stringify),
                content: result.content.clone(),
            }
        } else {
            let description = match result.content.get("erros") {
                Some(erros) => stringify(erros),
                None => stringify(result.content.get("detail").unwrap_or(&Value::Null)),
            };

            NewBatchItem {
                batch_id,
                installment_id,
                status: BatchItemStatus::Failed,
                external_id: None,
                description: Some(description),
                content: result.content.clone(),
            }
        }
    }
}

/// Renders a JSON value for the human-readable description column,
/// without the surrounding quotes for plain strings.
fn stringify(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
