use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::{NewComment, Validate};
use crate::handlers::created;
use crate::{AppState, Result};

/// `POST /v0/comments`
pub async fn create_comment(
    req: web::Json<NewComment>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let comment = state.store.insert_comment(&req).await?;
    info!(
        "Created comment {} on post {}",
        comment.comment_id, comment.comment_post_id
    );

    Ok(created(comment))
}
