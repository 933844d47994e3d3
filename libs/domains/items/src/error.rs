use axum::response::{IntoResponse, Response};
use axum_helpers::errors::AppError;
use thiserror::Error;

/// Errors produced by the items domain.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found with ID: {0}")]
    NotFound(i64),

    #[error("Title not found with ID: {0}")]
    TitleNotFound(i64),

    #[error("Class not found with ID: {0}")]
    ClassNotFound(i64),

    /// The request body referenced a title that does not exist. This is a
    /// client error, not a missing-resource error.
    #[error("Title not found for the supplied ID: {0}")]
    InvalidTitleRef(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) | ItemError::TitleNotFound(_) | ItemError::ClassNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            ItemError::InvalidTitleRef(_) | ItemError::Validation(_) => {
                AppError::BadRequest(err.to_string())
            }
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_resources_map_to_not_found() {
        for err in [
            ItemError::NotFound(1),
            ItemError::TitleNotFound(2),
            ItemError::ClassNotFound(3),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_invalid_title_ref_maps_to_bad_request() {
        let response = ItemError::InvalidTitleRef(999).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_title_ref_message() {
        let err = ItemError::InvalidTitleRef(999);
        assert_eq!(err.to_string(), "Title not found for the supplied ID: 999");
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let response = ItemError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
