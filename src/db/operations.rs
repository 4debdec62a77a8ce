use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::db::models::{
    Comment, NewComment, NewPost, NewPsikolog, NewReport, NewUser, NewWisdomPoint, Post,
    Psikolog, PsikologPoint, Report, User, WisdomPoint,
};
use crate::db::store::Store;
use crate::Result;

const INSERT_USER: &str = r#"
    INSERT INTO users (user_email, user_gender, user_age, user_profession)
    VALUES ($1, $2, $3, $4)
    RETURNING user_id, user_email, user_gender, user_age, user_profession
"#;

const INSERT_PSIKOLOG: &str = r#"
    INSERT INTO psikologs (psikolog_email, psikolog_name, psikolog_image_url, psikolog_bio)
    VALUES ($1, $2, $3, $4)
    RETURNING psikolog_id, psikolog_email, psikolog_name, psikolog_image_url,
              psikolog_wisdom, psikolog_bio
"#;

const SELECT_PSIKOLOG: &str = r#"
    SELECT psikolog_id, psikolog_email, psikolog_name, psikolog_image_url,
           psikolog_wisdom, psikolog_bio
    FROM psikologs
    WHERE psikolog_id = $1
"#;

const INSERT_POST: &str = r#"
    INSERT INTO posts (post_user_id, post_psikolog_id, post_title, post_category,
                       post_content, post_image_url)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING post_id, post_user_id, post_psikolog_id, post_date, post_title,
              post_category, post_content, post_image_url, post_report_count
"#;

const SELECT_ALL_POSTS: &str = r#"
    SELECT post_id, post_user_id, post_psikolog_id, post_date, post_title,
           post_category, post_content, post_image_url, post_report_count
    FROM posts
    ORDER BY post_id
"#;

const INSERT_COMMENT: &str = r#"
    INSERT INTO comments (comment_user_id, comment_psikolog_id, comment_post_id, comment_text)
    VALUES ($1, $2, $3, $4)
    RETURNING comment_id, comment_user_id, comment_psikolog_id, comment_post_id,
              comment_text, comment_date
"#;

// One statement: the report row and the post's counter move together.
const INSERT_REPORT: &str = r#"
    WITH report AS (
        INSERT INTO reports (report_user_id, report_post_id)
        VALUES ($1, $2)
        RETURNING report_id, report_user_id, report_post_id
    ), counted AS (
        UPDATE posts SET post_report_count = post_report_count + 1
        WHERE post_id = (SELECT report_post_id FROM report)
    )
    SELECT report_id, report_user_id, report_post_id FROM report
"#;

const INSERT_WISDOM_POINT: &str = r#"
    WITH point AS (
        INSERT INTO wisdom_points (wisdom_user_id, wisdom_psikolog_id)
        VALUES ($1, $2)
        RETURNING wisdom_id, wisdom_user_id, wisdom_psikolog_id
    ), counted AS (
        UPDATE psikologs SET psikolog_wisdom = psikolog_wisdom + 1
        WHERE psikolog_id = (SELECT wisdom_psikolog_id FROM point)
    )
    SELECT wisdom_id, wisdom_user_id, wisdom_psikolog_id FROM point
"#;

const SELECT_PSIKOLOG_POINT: &str = r#"
    SELECT psikolog_id, psikolog_wisdom
    FROM psikologs
    WHERE psikolog_id = $1
"#;

const EXISTS_WISDOM_POINT: &str = r#"
    SELECT EXISTS (
        SELECT 1 FROM wisdom_points
        WHERE wisdom_user_id = $1 AND wisdom_psikolog_id = $2
    )
"#;

/// Postgres-backed `Store`. sqlx prepares each statement once per pooled
/// connection and reuses it afterwards.
#[derive(Clone)]
pub struct DbOperations {
    pool: Arc<PgPool>,
}

impl DbOperations {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        Self::new_with_options(
            &config.url,
            config.max_connections,
            Duration::from_secs(config.acquire_timeout_secs),
        )
        .await
    }

    pub async fn new_with_options(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl Store for DbOperations {
    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(INSERT_USER)
            .bind(&user.user_email)
            .bind(&user.user_gender)
            .bind(user.user_age)
            .bind(&user.user_profession)
            .fetch_one(self.pool())
            .await?;

        debug!(user_id = user.user_id, "user created");
        Ok(user)
    }

    async fn insert_psikolog(&self, psikolog: &NewPsikolog) -> Result<Psikolog> {
        let psikolog = sqlx::query_as::<_, Psikolog>(INSERT_PSIKOLOG)
            .bind(&psikolog.psikolog_email)
            .bind(&psikolog.psikolog_name)
            .bind(&psikolog.psikolog_image_url)
            .bind(&psikolog.psikolog_bio)
            .fetch_one(self.pool())
            .await?;

        debug!(psikolog_id = psikolog.psikolog_id, "psikolog created");
        Ok(psikolog)
    }

    async fn get_psikolog(&self, psikolog_id: i32) -> Result<Option<Psikolog>> {
        let psikolog = sqlx::query_as::<_, Psikolog>(SELECT_PSIKOLOG)
            .bind(psikolog_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(psikolog)
    }

    async fn insert_post(&self, post: &NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(INSERT_POST)
            .bind(post.post_user_id)
            .bind(post.post_psikolog_id)
            .bind(&post.post_title)
            .bind(&post.post_category)
            .bind(&post.post_content)
            .bind(&post.post_image_url)
            .fetch_one(self.pool())
            .await?;

        debug!(post_id = post.post_id, "post created");
        Ok(post)
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(SELECT_ALL_POSTS)
            .fetch_all(self.pool())
            .await?;

        Ok(posts)
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(INSERT_COMMENT)
            .bind(comment.comment_user_id)
            .bind(comment.comment_psikolog_id)
            .bind(comment.comment_post_id)
            .bind(&comment.comment_text)
            .fetch_one(self.pool())
            .await?;

        Ok(comment)
    }

    async fn insert_report(&self, report: &NewReport) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(INSERT_REPORT)
            .bind(report.report_user_id)
            .bind(report.report_post_id)
            .fetch_one(self.pool())
            .await?;

        Ok(report)
    }

    async fn insert_wisdom_point(&self, point: &NewWisdomPoint) -> Result<WisdomPoint> {
        let point = sqlx::query_as::<_, WisdomPoint>(INSERT_WISDOM_POINT)
            .bind(point.user_id)
            .bind(point.psikolog_id)
            .fetch_one(self.pool())
            .await?;

        Ok(point)
    }

    async fn get_psikolog_point(&self, psikolog_id: i32) -> Result<Option<PsikologPoint>> {
        let point = sqlx::query_as::<_, PsikologPoint>(SELECT_PSIKOLOG_POINT)
            .bind(psikolog_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(point)
    }

    async fn has_wisdom_point(&self, user_id: i32, psikolog_id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(EXISTS_WISDOM_POINT)
            .bind(user_id)
            .bind(psikolog_id)
            .fetch_one(self.pool())
            .await?;

        Ok(exists)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
