//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► Upstream 인증 서비스
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 `{"detail": ...}` 응답으로 변환됩니다.

pub mod auth;
