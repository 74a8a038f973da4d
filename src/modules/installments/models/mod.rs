pub mod financial_installment;
pub mod financing;

pub use financial_installment::FinancialInstallment;
pub use financing::Financing;

/// An installment joined with its owning financing, as produced by the
/// due-installment query.
#[derive(Debug, Clone)]
pub struct DueInstallment {
    pub installment: FinancialInstallment,
    pub financing: Financing,
}
