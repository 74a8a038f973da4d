pub mod payload;

pub use payload::BilletPayload;
