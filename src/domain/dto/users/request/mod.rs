//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증
//!
//! JSON 구조와 필드 타입 일치성만 `serde` 역직렬화로 확인합니다.
//! 실패 시 HTTP 422 응답으로 변환되며, 업스트림 호출은 일어나지 않습니다.

pub mod auth_request;

pub use auth_request::LoginRequest;
