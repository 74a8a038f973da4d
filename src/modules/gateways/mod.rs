// Billet provider gateway module

pub mod services;

pub use services::{BilletGateway, GatewayResult, HttpBilletGateway};
