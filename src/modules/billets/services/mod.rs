pub mod payload_builder;
pub mod pipeline;

pub use payload_builder::PayloadBuilder;
pub use pipeline::{BillingPipeline, PipelineReport};
