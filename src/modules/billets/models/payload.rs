use serde::{Deserialize, Serialize};

/// Request body sent to the billet provider's creation endpoint.
///
/// Field names follow the provider's camelCase wire format. Fine and
/// interest fields are fixed business policy, not configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilletPayload {
    /// Raw installment amount at its native integer precision
    pub amount: i64,
    /// Expiration date as YYYY-MM-DD
    pub expire_at: String,
    pub description: String,
    pub instructions: String,
    pub document_number: String,
    pub control_number: String,
    pub tags: Vec<String>,
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    pub fine_type: u8,
    pub fine_percentage: String,
    pub fine_value: String,
    pub days_for_fine: u8,
    pub interest_type: u8,
    pub interest_percentage: String,
    pub interest_value: String,
    pub days_to_interest: u8,
}
