//! 로그인 릴레이 서비스
//!
//! `POST /login`으로 받은 자격 증명을 업스트림 인증 서비스로 전달하고,
//! 업스트림 JSON 응답을 검증된 스키마로 재구성해 돌려주는 얇은 HTTP 릴레이입니다.
//! 특정 엔드포인트에 묶이지 않은 범용 GET 전달 클라이언트도 함께 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /login, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← LoginService, ExternalServiceClient
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Upstream     │ ← 외부 인증 서비스 (HTTPS)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use login_relay::routes::configure_all_routes;
//! use login_relay::services::auth::LoginService;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(LoginService::from_env()))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
