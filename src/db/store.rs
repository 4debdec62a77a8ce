use async_trait::async_trait;

use crate::db::models::{
    Comment, NewComment, NewPost, NewPsikolog, NewReport, NewUser, NewWisdomPoint, Post,
    Psikolog, PsikologPoint, Report, User, WisdomPoint,
};
use crate::Result;

/// Data access used by the HTTP handlers. Every method maps to exactly
/// one SQL statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, user: &NewUser) -> Result<User>;

    async fn insert_psikolog(&self, psikolog: &NewPsikolog) -> Result<Psikolog>;

    /// `None` when no counselor has the given id.
    async fn get_psikolog(&self, psikolog_id: i32) -> Result<Option<Psikolog>>;

    async fn insert_post(&self, post: &NewPost) -> Result<Post>;

    async fn get_all_posts(&self) -> Result<Vec<Post>>;

    async fn insert_comment(&self, comment: &NewComment) -> Result<Comment>;

    /// Also bumps the reported post's `post_report_count`.
    async fn insert_report(&self, report: &NewReport) -> Result<Report>;

    /// Also bumps the counselor's `psikolog_wisdom`. A second point for the
    /// same (user, psikolog) pair fails with `DatabaseError::Duplicate`.
    async fn insert_wisdom_point(&self, point: &NewWisdomPoint) -> Result<WisdomPoint>;

    async fn get_psikolog_point(&self, psikolog_id: i32) -> Result<Option<PsikologPoint>>;

    async fn has_wisdom_point(&self, user_id: i32, psikolog_id: i32) -> Result<bool>;

    async fn ping(&self) -> Result<()>;

    async fn close(&self);
}
