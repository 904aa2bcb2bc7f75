//! # Domain Models
//!
//! 외부 시스템과 주고받는 모델을 정의합니다.
//! DTO가 우리 API의 계약이라면, 이 모듈의 타입은 업스트림 API의 계약입니다.

pub mod auth;

pub use auth::*;
