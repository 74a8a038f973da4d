// Builds the billet provider request from an installment and its
// financing. Pure derivation; the only storage or network activity in
// the pipeline happens before and after this step.

use rust_decimal::Decimal;
use tracing::warn;

use crate::core::currency::format_amount_pt_br;
use crate::core::dates::month_year_tag;
use crate::core::{AppError, Result};
use crate::modules::billets::models::BilletPayload;
use crate::modules::installments::models::{FinancialInstallment, Financing};

/// Billet type tag for regular (non-renegotiated) installments
const BILLET_TYPE_REGULAR: &str = "regular";

/// Financing brand name shown on the billet description
const FINANCING_PROVIDER: &str = "Solaris";

const INSTRUCTIONS: &str = "Você também consegue acessar seus boletos através do nosso portal: \
cliente.xpto.com.br. Guarde esse site, para consultar quando precisar.";

// Fixed fine/interest policy applied to every billet
const FINE_TYPE: u8 = 1;
const FINE_PERCENTAGE: &str = "2.00";
const FINE_VALUE: &str = "0.01";
const DAYS_FOR_FINE: u8 = 1;
const INTEREST_TYPE: u8 = 0;
const INTEREST_PERCENTAGE: &str = "0.03";
const INTEREST_VALUE: &str = "0.01";
const DAYS_TO_INTEREST: u8 = 1;

pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Derives the provider payload. A failed derivation is logged and
    /// propagated unchanged; converting it into a pipeline outcome is the
    /// caller's job.
    pub fn build(
        installment: &FinancialInstallment,
        financing: &Financing,
    ) -> Result<BilletPayload> {
        Self::assemble(installment, financing).map_err(|err| {
            warn!(
                installment_id = installment.id,
                error = %err,
                "Failed to build billet payload"
            );
            err
        })
    }

    fn assemble(
        installment: &FinancialInstallment,
        financing: &Financing,
    ) -> Result<BilletPayload> {
        let document_number = Self::document_number(installment.number, financing.id)?;

        Ok(BilletPayload {
            amount: installment.amount,
            expire_at: installment.expire_on.format("%Y-%m-%d").to_string(),
            description: Self::description(installment, financing),
            instructions: INSTRUCTIONS.to_string(),
            control_number: document_number.clone(),
            document_number,
            tags: Self::tags(installment, financing),
            customer_id: financing.customer_id,
            fine_type: FINE_TYPE,
            fine_percentage: FINE_PERCENTAGE.to_string(),
            fine_value: FINE_VALUE.to_string(),
            days_for_fine: DAYS_FOR_FINE,
            interest_type: INTEREST_TYPE,
            interest_percentage: INTEREST_PERCENTAGE.to_string(),
            interest_value: INTEREST_VALUE.to_string(),
            days_to_interest: DAYS_TO_INTEREST,
        })
    }

    fn description(installment: &FinancialInstallment, financing: &Financing) -> String {
        format!(
            "Installment No {}/{} of financing {}",
            installment.number, financing.installments_number, FINANCING_PROVIDER
        )
    }

    /// Financing id concatenated with the installment number zero-padded
    /// to three digits. Numbers that do not fit in three digits are
    /// rejected rather than truncated.
    fn document_number(number: i32, financing_id: i64) -> Result<String> {
        if !(0..=999).contains(&number) {
            return Err(AppError::validation(format!(
                "Installment number {} does not fit in a 3-digit document number",
                number
            )));
        }

        Ok(format!("{}{:03}", financing_id, number))
    }

    fn tags(installment: &FinancialInstallment, financing: &Financing) -> Vec<String> {
        let amount = format_amount_pt_br(Decimal::from(installment.amount));

        vec![
            BILLET_TYPE_REGULAR.to_string(),
            month_year_tag(installment.expire_on),
            format!(
                "{}[{}/{}/{}]",
                installment.number, amount, financing.identifier, BILLET_TYPE_REGULAR
            ),
        ]
    }
}
