use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::{NewUser, Validate};
use crate::handlers::created;
use crate::{AppState, Result};

/// `POST /v0/users`
pub async fn create_user(
    req: web::Json<NewUser>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let user = state.store.insert_user(&req).await?;
    info!("Created user {} for email: {}", user.user_id, user.user_email);

    Ok(created(user))
}
