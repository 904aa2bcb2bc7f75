//! 아웃바운드 HTTP 호출 공통 헬퍼
//!
//! 모든 호출은 요청마다 새 `reqwest::Client`를 만들고 응답 후 버립니다.
//! 호출 간 커넥션 풀은 공유하지 않습니다.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::redirect::Policy;

use crate::errors::{AppResult, ErrorContext};

/// 요청 한 건을 위한 HTTP 클라이언트를 생성합니다.
///
/// 리다이렉트는 따라가지 않습니다. 3xx 응답도 2xx가 아닌 상태로 호출자에게 전달됩니다.
/// `timeout`이 `None`이면 reqwest 기본값을 사용합니다.
pub fn build_client(timeout: Option<Duration>) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().redirect(Policy::none());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().context("HTTP 클라이언트 생성 실패")
}

/// 2xx가 아닌 업스트림 응답에서 에러 상세를 추출합니다.
///
/// - 본문이 비어 있으면 상태 코드와 사유 문구
/// - 본문이 JSON이면 정규화된 JSON 문자열
/// - 그 밖에는 본문 원문
pub fn error_detail(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP status {}", status);
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_client(None).is_ok());
        assert!(build_client(Some(Duration::from_secs(1))).is_ok());
    }

    #[test]
    fn test_error_detail_variants() {
        assert_eq!(
            error_detail(StatusCode::SERVICE_UNAVAILABLE, ""),
            "HTTP status 503 Service Unavailable"
        );
        assert_eq!(
            error_detail(StatusCode::UNAUTHORIZED, r#"{ "message": "invalid credentials" }"#),
            r#"{"message":"invalid credentials"}"#
        );
        assert_eq!(error_detail(StatusCode::FOUND, "moved"), "moved");
    }
}
