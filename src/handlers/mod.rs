//! HTTP handlers for the `/v0` API.
//!
//! Each handler decodes its input, runs the presence checks, makes a single
//! `Store` call and answers with a JSON array of records.

pub mod comments;
pub mod posts;
pub mod psikologs;
pub mod reports;
pub mod users;
pub mod wisdom;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::error::{AppError, JSON_CONTENT_TYPE};

/// 201 with the stored record wrapped in a one-element array.
pub(crate) fn created<T: Serialize>(record: T) -> HttpResponse {
    HttpResponse::Created()
        .content_type(JSON_CONTENT_TYPE)
        .json([record])
}

/// 200 with a JSON body.
pub(crate) fn ok<T: Serialize>(body: T) -> HttpResponse {
    HttpResponse::Ok().content_type(JSON_CONTENT_TYPE).json(body)
}

pub(crate) fn required<T>(value: Option<T>, name: &'static str) -> Result<T, AppError> {
    value.ok_or(AppError::MissingField(name))
}
