// Billets module

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::run_billet_pipeline;
pub use models::BilletPayload;
pub use services::{BillingPipeline, PayloadBuilder, PipelineReport};
