use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde_json::json;
use thiserror::Error;
use use_cases::contacts::ContactError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(#[from] anyhow::Error),
    /// Internal failure whose cause is logged but never sent to the client.
    #[error("Server error")]
    ServerError(anyhow::Error),
}

impl ApiError {
    /// Same mapping as `From<ContactError>` except internal failures hide their message.
    pub fn masked(err: ContactError) -> Self {
        match err {
            ContactError::Internal(err) => ApiError::ServerError(err),
            other => other.into(),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        let message = err.to_string();
        match err {
            ContactError::InvalidId => ApiError::BadRequest(message),
            ContactError::NotFound => ApiError::NotFound(message),
            ContactError::Forbidden => ApiError::Forbidden(message),
            ContactError::Internal(err) => ApiError::InternalServerError(err),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) | ApiError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::ServerError(cause) = self {
            tracing::error!("{cause:?}");
        }
        let err_json = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}
