pub mod gateway_trait;
pub mod http_gateway;

pub use gateway_trait::{BilletGateway, GatewayResult};
pub use http_gateway::HttpBilletGateway;
