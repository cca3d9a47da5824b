use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("movie not found")]
    NotFound,

    #[error("a movie with that title is already in the list")]
    Conflict,

    #[error("catalog request failed: {0}")]
    Integration(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Integration(err.to_string())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::Integration(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound | AppError::Conflict | AppError::Validation(_) => {
                tracing::warn!(%status, error = %self, "request failed");
            }
            AppError::Integration(_) | AppError::Db(_) => {
                tracing::error!(%status, error = %self, "request failed");
            }
        }
        let body = crate::templates::error_page(self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
