use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Number must be non-negative")]
    NegativeNumber,

    #[error("Maximum must be greater than or equal to minimum")]
    InvertedRange,

    #[error("Range too large, the limit is {0}")]
    RangeTooLarge(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] redis::RedisError),

    #[error("Malformed attempt record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NegativeNumber | AppError::InvertedRange | AppError::RangeTooLarge(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Storage(_) | AppError::MalformedRecord(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
