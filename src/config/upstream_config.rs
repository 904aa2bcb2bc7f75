//! # Upstream Configuration Module
//!
//! 로그인 요청을 전달할 업스트림 인증 서비스 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 업스트림 로그인 엔드포인트 (기본값: xquare dsm-login)
//! export UPSTREAM_LOGIN_URL="https://prod-server.xquare.app/dsm-login/user/user-data"
//!
//! # 업스트림 요청 타임아웃 (초, 기본값: 5)
//! export UPSTREAM_TIMEOUT_SECS="5"
//!
//! # 요청 로그에서 비밀번호 마스킹 (기본값: false)
//! export LOG_REDACT_PASSWORD="true"
//! ```

use std::env;
use std::time::Duration;

/// 기본 업스트림 로그인 엔드포인트
pub const DEFAULT_LOGIN_URL: &str = "https://prod-server.xquare.app/dsm-login/user/user-data";

/// 기본 업스트림 타임아웃 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// 업스트림 인증 서비스 설정
pub struct UpstreamConfig;

impl UpstreamConfig {
    /// 로그인 요청을 전달할 업스트림 URL을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `UPSTREAM_LOGIN_URL`: 커스텀 업스트림 URL
    pub fn login_url() -> String {
        env::var("UPSTREAM_LOGIN_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string())
    }

    /// 업스트림 요청 타임아웃을 반환합니다.
    ///
    /// 0이거나 숫자가 아니면 기본값(5초)을 사용합니다.
    pub fn timeout() -> Duration {
        let secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Duration::from_secs(secs)
    }

    /// 요청 로그에서 비밀번호를 가릴지 여부를 반환합니다.
    ///
    /// 기본값은 `false`이며 이 경우 아웃바운드 페이로드가 평문 그대로 기록됩니다.
    pub fn redact_password() -> bool {
        env::var("LOG_REDACT_PASSWORD")
            .map(|v| Self::parse_flag(&v))
            .unwrap_or(false)
    }

    fn parse_flag(value: &str) -> bool {
        matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
    }
}
