use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::{NewPost, Validate};
use crate::handlers::{created, ok};
use crate::{AppState, Result};

/// `GET /v0/posts`
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.store.get_all_posts().await?;
    Ok(ok(posts))
}

/// `POST /v0/posts`
pub async fn create_post(
    req: web::Json<NewPost>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    req.validate()?;

    let post = state.store.insert_post(&req).await?;
    info!("Created post {} by user {}", post.post_id, post.post_user_id);

    Ok(created(post))
}
