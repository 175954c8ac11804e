use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::pagination::SortParseError;
use crate::repository::RepositoryError;

/// Failures surfaced by the service layer, mapped to HTTP statuses at the
/// route boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A uniqueness rule rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// A paginated query produced zero rows.
    #[error("{0}")]
    EmptyPage(String),
    /// The request payload or parameters failed validation.
    #[error("{0}")]
    Validation(String),
    /// No logged-in user could be resolved for a session-scoped operation.
    #[error("authentication required")]
    Unauthorized,
    /// The storage layer failed.
    #[error(transparent)]
    Repository(RepositoryError),
    /// A collaborator outside the storage layer failed.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound("record not found".to_string()),
            RepositoryError::Conflict => Self::Conflict("record already exists".to_string()),
            other => Self::Repository(other),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<SortParseError> for ServiceError {
    fn from(value: SortParseError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::EmptyPage(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("request failed: {self}");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string(),
            "status": self.status_code().as_u16(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_service_not_found() {
        let err = ServiceError::from(RepositoryError::NotFound);
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = ServiceError::from(RepositoryError::Conflict);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn empty_page_is_reported_as_not_found() {
        let err = ServiceError::EmptyPage("no categories found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn sort_parse_errors_are_validation_failures() {
        let err = ServiceError::from(SortParseError::Order("sideways".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
