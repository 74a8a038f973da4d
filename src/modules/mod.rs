pub mod batches;
pub mod billets;
pub mod gateways;
pub mod installments;
