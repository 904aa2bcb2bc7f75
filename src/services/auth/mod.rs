//! 인증 서비스 모듈
//!
//! 자격 증명을 업스트림 인증 서비스로 전달하는 릴레이를 제공합니다.
//! 토큰 발급이나 세션 관리는 하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::LoginService;
//!
//! let service = LoginService::from_env();
//! let user = service.login(&request).await?;
//! ```

pub mod login_service;

pub use login_service::*;
