//! Authentication HTTP Handlers
//!
//! 로그인 릴레이 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `POST /login` - 자격 증명을 업스트림으로 전달하고 검증된 사용자 레코드 반환
use actix_web::error::JsonPayloadError;
use actix_web::{post, web, HttpRequest, HttpResponse};
use crate::domain::LoginRequest;
use crate::errors::AppError;
use crate::services::auth::LoginService;

/// 로그인 릴레이 핸들러
///
/// 본문 검증은 업스트림 호출 전에 끝납니다. JSON 구문, 필드 누락,
/// 타입 오류는 [`json_error_handler`]에서 422로 거부됩니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    login_service: web::Data<LoginService>,
) -> Result<HttpResponse, AppError> {
    let user = login_service.login(&payload).await?;

    log::info!("로그인 릴레이 성공 - accountId: {}", user.account_id);

    Ok(HttpResponse::Ok().json(user))
}

/// JSON 추출 실패를 `AppError::ValidationError`로 변환합니다.
///
/// 잘못된 JSON, 필드 누락, 타입 불일치, Content-Type 오류 모두 422 응답이 됩니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("잘못된 요청 본문 - 경로: {}, 에러: {}", req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}
