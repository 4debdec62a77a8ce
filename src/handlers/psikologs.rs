use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::db::{NewPsikolog, Validate};
use crate::error::{AppError, DatabaseError};
use crate::handlers::{created, ok, required};
use crate::{AppState, Result};

#[derive(Debug, Deserialize)]
pub struct RelieverQuery {
    pub reliever_id: Option<i32>,
}

/// `POST /v0/psikologs`
pub async fn create_psikolog(
    req: web::Json<NewPsikolog>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let psikolog = state.store.insert_psikolog(&req).await?;
    info!(
        "Created psikolog {} ({})",
        psikolog.psikolog_id, psikolog.psikolog_name
    );

    Ok(created(psikolog))
}

/// `GET /v0/reliever?reliever_id=`
pub async fn get_reliever(
    query: web::Query<RelieverQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let reliever_id = required(query.reliever_id, "reliever_id")?;

    let psikolog = state
        .store
        .get_psikolog(reliever_id)
        .await?
        .ok_or(AppError::DatabaseError(DatabaseError::NotFound))?;

    Ok(ok([psikolog]))
}
