//! # 로그인 릴레이 서비스
//!
//! 인바운드 자격 증명을 업스트림 인증 서비스로 전달하고,
//! 업스트림 응답을 [`UserResponse`] 스키마로 검증해 돌려줍니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! LoginRequest ──► LoginPayload ──► POST {UPSTREAM_LOGIN_URL}
//!                                         │
//!            ┌────────────────────────────┼──────────────────────────┐
//!            ▼                            ▼                          ▼
//!       응답 없음                      2xx 아님                      2xx
//!     RequestError (500)       UpstreamStatus (동일 상태)     UserResponse 검증
//!                                                                    │
//!                                                    실패 ──► BadUpstreamResponse (500)
//! ```
//!
//! 재시도는 하지 않으며, 모든 실패는 로그를 남긴 뒤 호출자에게 그대로 전달됩니다.

use std::time::Duration;

use log::{error, info};

use crate::config::UpstreamConfig;
use crate::domain::dto::users::request::LoginRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::LoginPayload;
use crate::errors::{AppError, AppResult};
use crate::services::upstream;

/// 로그인 릴레이 서비스
///
/// 불변 설정만 보관하므로 `web::Data`로 모든 워커가 공유해도 안전합니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let service = LoginService::from_env();
/// let user = service.login(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LoginService {
    login_url: String,
    timeout: Duration,
    redact_password: bool,
}

impl LoginService {
    pub fn new(login_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            login_url: login_url.into(),
            timeout,
            redact_password: false,
        }
    }

    /// 환경 변수 기반 설정으로 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(UpstreamConfig::login_url(), UpstreamConfig::timeout())
            .with_password_redaction(UpstreamConfig::redact_password())
    }

    /// 요청 로그에서 비밀번호를 가릴지 설정합니다.
    pub fn with_password_redaction(mut self, redact_password: bool) -> Self {
        self.redact_password = redact_password;
        self
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn redacts_password(&self) -> bool {
        self.redact_password
    }

    /// 자격 증명을 업스트림으로 전달하고 검증된 사용자 레코드를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 업스트림 2xx + 스키마 검증 성공
    /// * `Err(AppError::UpstreamStatus)` - 업스트림이 2xx 이외의 상태 반환
    /// * `Err(AppError::RequestError)` - 연결 거부, 타임아웃, DNS 실패 등
    /// * `Err(AppError::BadUpstreamResponse)` - 2xx 본문이 스키마와 불일치
    /// * `Err(AppError::UnexpectedError)` - HTTP 클라이언트 생성 실패 등
    pub async fn login(&self, request: &LoginRequest) -> AppResult<UserResponse> {
        let payload = LoginPayload::from(request);

        info!(
            "Sending request to {} with payload: {}",
            self.login_url,
            payload.to_log_string(self.redact_password)
        );

        let result = self.forward(&payload).await;

        if let Err(e) = &result {
            match e {
                AppError::UpstreamStatus { status, .. } => {
                    error!("HTTP error occurred ({}): {}", status, e)
                }
                _ => error!("로그인 릴레이 실패 - accountId: {}, 에러: {}", request.account_id, e),
            }
        }

        result
    }

    async fn forward(&self, payload: &LoginPayload<'_>) -> AppResult<UserResponse> {
        let client = upstream::build_client(Some(self.timeout))?;

        let response = client
            .post(&self.login_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                detail: format!("로그인 실패: {}", upstream::error_detail(status, &body)),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::RequestError(e.to_string()))?;

        info!("Received response: {}", body);

        serde_json::from_str::<UserResponse>(&body)
            .map_err(|e| AppError::BadUpstreamResponse(e.to_string()))
    }
}
