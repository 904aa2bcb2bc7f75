//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 로그인 릴레이 ([`auth::LoginService`])
//! - 범용 GET 전달 클라이언트 ([`external::ExternalServiceClient`])

pub mod auth;
pub mod external;
pub mod upstream;
