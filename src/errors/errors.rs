//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 릴레이 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{"detail": "..."}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 시점 | HTTP 상태 |
//! |------|-----------|-----------|
//! | `ValidationError` | 인바운드 요청 본문 검증 실패 | 422 |
//! | `UpstreamStatus` | 업스트림이 2xx 이외의 상태 반환 | 업스트림 상태 그대로 |
//! | `RequestError` | 업스트림 응답을 받지 못함 (연결 거부, 타임아웃, DNS) | 500 |
//! | `BadUpstreamResponse` | 2xx 응답 본문이 스키마와 불일치 | 500 |
//! | `UnexpectedError` | 그 밖의 모든 실패 | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn parse_user(body: &str) -> AppResult<UserResponse> {
//!     serde_json::from_str(body)
//!         .map_err(|e| AppError::BadUpstreamResponse(e.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 어떤 에러도 로컬에서 재시도되거나 복구되지 않으며,
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("{0}")]
    ValidationError(String),

    /// 업스트림 상태 에러 (업스트림의 상태 코드를 그대로 전달)
    #[error("{detail}")]
    UpstreamStatus { status: u16, detail: String },

    /// 업스트림 전송 에러 (500 Internal Server Error)
    #[error("Request error occurred: {0}")]
    RequestError(String),

    /// 업스트림 2xx 응답의 스키마 검증 실패 (500 Internal Server Error)
    #[error("Invalid upstream response: {0}")]
    BadUpstreamResponse(String),

    /// 예상하지 못한 에러 (500 Internal Server Error)
    #[error("Unexpected error occurred: {0}")]
    UnexpectedError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"detail": ...}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "detail": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::UnexpectedError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::UnexpectedError(format!("{}: {}", f(), e)))
    }
}
