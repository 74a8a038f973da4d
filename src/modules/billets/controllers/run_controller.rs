use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::billets::services::BillingPipeline;

/// Trigger one billet creation run
/// POST /v1/billets/run
pub async fn run_billet_pipeline(
    pipeline: web::Data<Arc<BillingPipeline>>,
) -> Result<HttpResponse, AppError> {
    let report = pipeline.run().await?;

    Ok(HttpResponse::Ok().json(report))
}
