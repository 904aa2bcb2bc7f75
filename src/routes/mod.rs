//! API 라우트 설정 모듈
//!
//! 로그인 릴레이 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(LoginService::from_env()))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono::Utc;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `LoginService`는 호출하는 쪽에서 `web::Data`로 등록해야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 추출 실패 → 422
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::auth::json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /login` - 업스트림 로그인 릴레이
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/login \
///   -H "Content-Type: application/json" \
///   -d '{"accountId":"student01","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 업스트림 상태와 무관하게 프로세스가 살아 있으면 200을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "login_relay",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
