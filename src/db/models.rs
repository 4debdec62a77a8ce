use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub user_email: String,
    pub user_gender: String,
    pub user_age: i32,
    pub user_profession: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub user_email: String,
    #[serde(default)]
    pub user_gender: String,
    #[serde(default)]
    pub user_age: i32,
    #[serde(default)]
    pub user_profession: String,
}

/// Platform counselor, exposed to clients as a "reliever".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Psikolog {
    pub psikolog_id: i32,
    pub psikolog_email: String,
    pub psikolog_name: String,
    pub psikolog_image_url: String,
    pub psikolog_wisdom: i32,
    pub psikolog_bio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPsikolog {
    pub psikolog_email: String,
    pub psikolog_name: String,
    #[serde(default)]
    pub psikolog_image_url: String,
    #[serde(default)]
    pub psikolog_bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub post_id: i32,
    pub post_user_id: i32,
    pub post_psikolog_id: i32,
    pub post_date: DateTime<Utc>,
    pub post_title: String,
    pub post_category: String,
    pub post_content: String,
    pub post_image_url: String,
    pub post_report_count: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub post_user_id: i32,
    pub post_psikolog_id: i32,
    pub post_title: String,
    #[serde(default)]
    pub post_category: String,
    pub post_content: String,
    #[serde(default)]
    pub post_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub comment_user_id: i32,
    pub comment_psikolog_id: i32,
    pub comment_post_id: i32,
    pub comment_text: String,
    pub comment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub comment_user_id: i32,
    pub comment_psikolog_id: i32,
    pub comment_post_id: i32,
    pub comment_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub report_id: i32,
    pub report_user_id: i32,
    pub report_post_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub report_user_id: i32,
    pub report_post_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WisdomPoint {
    pub wisdom_id: i32,
    pub wisdom_user_id: i32,
    pub wisdom_psikolog_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWisdomPoint {
    pub user_id: i32,
    pub psikolog_id: i32,
}

/// A counselor's accumulated wisdom score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PsikologPoint {
    pub psikolog_id: i32,
    pub psikolog_wisdom: i32,
}

/// Whether a user may still give a counselor a wisdom point. Clients
/// expect the flag as the string `"true"` or `"false"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WisdomPointStatus {
    pub wisdom_point_status: String,
}

impl WisdomPointStatus {
    pub fn from_given(already_given: bool) -> Self {
        Self {
            wisdom_point_status: (!already_given).to_string(),
        }
    }
}

/// Presence checks run before a record reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn require(value: &str, name: &'static str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingField(name));
    }
    Ok(())
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.user_email, "user_email")
    }
}

impl Validate for NewPsikolog {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.psikolog_email, "psikolog_email")?;
        require(&self.psikolog_name, "psikolog_name")
    }
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.post_title, "post_title")?;
        require(&self.post_content, "post_content")
    }
}

impl Validate for NewComment {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.comment_text, "comment_text")
    }
}

impl Validate for NewReport {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Validate for NewWisdomPoint {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}
