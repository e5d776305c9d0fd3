use crate::repository::database::DbError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: DbError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Maps a repository failure. A dangling reference is the caller's
    /// fault and becomes a 400; everything else is logged and becomes a 500.
    pub fn database(context: &'static str, source: DbError) -> Self {
        if source.is_foreign_key_violation() {
            return ApiError::BadRequest("Referenced record does not exist".to_string());
        }
        error!("{}: {:?}", context, source);
        ApiError::Internal { context, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    fn db_error(kind: DatabaseErrorKind) -> DbError {
        DbError::QueryError(DieselError::DatabaseError(kind, Box::new("violation".to_string())))
    }

    #[test]
    fn foreign_key_violation_is_a_bad_request() {
        let err = ApiError::database(
            "Failed to create result",
            db_error(DatabaseErrorKind::ForeignKeyViolation),
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_database_errors_are_internal() {
        let err = ApiError::database("Failed to fetch users", DbError::QueryError(DieselError::NotFound));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch users");
    }

    #[test]
    fn unique_violation_is_detected() {
        assert!(db_error(DatabaseErrorKind::UniqueViolation).is_unique_violation());
        assert!(!db_error(DatabaseErrorKind::ForeignKeyViolation).is_unique_violation());
    }

    #[actix_web::test]
    async fn error_body_carries_message() {
        let resp = ApiError::not_found("Toto not found").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Toto not found");
    }
}
