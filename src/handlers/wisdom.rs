use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::db::{NewWisdomPoint, Validate, WisdomPointStatus};
use crate::error::{AppError, DatabaseError};
use crate::handlers::{created, ok, required};
use crate::{AppState, Result};

#[derive(Debug, Deserialize)]
pub struct WisdomQuery {
    pub psikolog_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CheckWisdomQuery {
    pub psikolog_id: Option<i32>,
    pub user_id: Option<i32>,
}

/// `GET /v0/wisdom?psikolog_id=`
pub async fn get_wisdom(
    query: web::Query<WisdomQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let psikolog_id = required(query.psikolog_id, "psikolog_id")?;

    let point = state
        .store
        .get_psikolog_point(psikolog_id)
        .await?
        .ok_or(AppError::DatabaseError(DatabaseError::NotFound))?;

    Ok(ok([point]))
}

/// `POST /v0/wisdom` with `{"user_id": 1, "psikolog_id": 1}`
pub async fn create_wisdom_point(
    req: web::Json<NewWisdomPoint>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let point = state.store.insert_wisdom_point(&req).await?;
    info!(
        "User {} gave psikolog {} a wisdom point",
        point.wisdom_user_id, point.wisdom_psikolog_id
    );

    Ok(created(point))
}

/// `GET /v0/checkwisdom?psikolog_id=&user_id=`
///
/// Answers `"true"` while the user can still give the psikolog a point.
pub async fn check_wisdom(
    query: web::Query<CheckWisdomQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let psikolog_id = required(query.psikolog_id, "psikolog_id")?;
    let user_id = required(query.user_id, "user_id")?;

    let given = state.store.has_wisdom_point(user_id, psikolog_id).await?;

    Ok(ok([WisdomPointStatus::from_given(given)]))
}
