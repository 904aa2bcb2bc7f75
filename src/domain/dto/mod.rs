//! # Data Transfer Objects
//!
//! HTTP 계층의 API 계약을 정의하는 DTO 모듈입니다.
//! `serde`로 JSON과 Rust 타입을 변환하며, 역직렬화가 곧 입력 검증입니다.

pub mod users;

pub use users::*;
