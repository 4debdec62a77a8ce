use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Content type of every JSON body this service writes.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Unsupported content type: {0}")]
    NotAcceptable(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Record not found")]
    NotFound,

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Foreign key violation: {0}")]
    MissingReference(String),
}

/// JSON body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub code: u16,
}

impl AppError {
    /// Message shown to clients. Details stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(DatabaseError::Duplicate(_)) => {
                "Bad request. Record exists.".to_string()
            }
            AppError::DatabaseError(DatabaseError::MissingReference(_)) => {
                "Bad request. Referenced record does not exist.".to_string()
            }
            AppError::DatabaseError(DatabaseError::NotFound) | AppError::RouteNotFound(_) => {
                "Not Found".to_string()
            }
            AppError::MissingField(name) => format!("Bad request. Missing {}.", name),
            AppError::MalformedRequest(_) => "Bad request. Malformed request.".to_string(),
            AppError::NotAcceptable(_) => {
                "Not acceptable. Expected application/json.".to_string()
            }
            AppError::PayloadTooLarge(_) => "Payload too large.".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::DatabaseError(DatabaseError::NotFound),
            sqlx::Error::Database(ref db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    AppError::DatabaseError(DatabaseError::Duplicate(db_err.message().to_string()))
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => AppError::DatabaseError(
                    DatabaseError::MissingReference(db_err.message().to_string()),
                ),
                _ => AppError::DatabaseError(DatabaseError::QueryError(err.to_string())),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => {
                AppError::DatabaseError(DatabaseError::ConnectionError(err.to_string()))
            }
            _ => AppError::DatabaseError(DatabaseError::QueryError(err.to_string())),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::ContentType => AppError::NotAcceptable(err.to_string()),
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                AppError::PayloadTooLarge(err.to_string())
            }
            _ => AppError::MalformedRequest(err.to_string()),
        }
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::MalformedRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        HttpResponse::build(status)
            .content_type(JSON_CONTENT_TYPE)
            .json(ErrorEnvelope {
                error: self.client_message(),
                code: status.as_u16(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(DatabaseError::Duplicate(_)) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(DatabaseError::MissingReference(_)) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(DatabaseError::NotFound) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
