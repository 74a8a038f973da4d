// Installments module

pub mod models;
pub mod repositories;

pub use models::{DueInstallment, FinancialInstallment, Financing};
pub use repositories::{InstallmentSelector, PgInstallmentRepository};
