use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::{NewReport, Validate};
use crate::handlers::created;
use crate::{AppState, Result};

/// `POST /v0/reports`
pub async fn create_report(
    req: web::Json<NewReport>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let report = state.store.insert_report(&req).await?;
    info!(
        "Post {} reported by user {}",
        report.report_post_id, report.report_user_id
    );

    Ok(created(report))
}
