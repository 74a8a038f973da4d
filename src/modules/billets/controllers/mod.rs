pub mod run_controller;

pub use run_controller::run_billet_pipeline;
