//! # 범용 외부 서비스 클라이언트
//!
//! 임의의 base URL에 대해 `GET {base_url}/example` 요청을 보내고
//! 파싱된 JSON 본문을 그대로 돌려주는 재사용 가능한 헬퍼입니다.
//! 로그인 흐름과는 연결되어 있지 않습니다.

use std::collections::BTreeMap;
use std::time::Duration;

use log::{error, info};
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::services::upstream;

/// 범용 GET 전달 클라이언트
///
/// base URL만 설정으로 보관하며, 호출마다 새 연결을 엽니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let client = ExternalServiceClient::new("https://api.example.com");
///
/// let mut params = BTreeMap::new();
/// params.insert("a".to_string(), "1".to_string());
///
/// // GET https://api.example.com/example?a=1
/// let body = client.get_example(Some(&params)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ExternalServiceClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl ExternalServiceClient {
    /// base URL 끝의 `/`는 무시됩니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            timeout: None,
        }
    }

    /// 요청 타임아웃을 설정합니다. 설정하지 않으면 reqwest 기본값을 따릅니다.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 요청할 전체 URL을 만듭니다.
    ///
    /// 파라미터는 키 순서대로 퍼센트 인코딩됩니다.
    pub fn example_url(&self, params: Option<&BTreeMap<String, String>>) -> String {
        let url = format!("{}/example", self.base_url);

        match params.filter(|params| !params.is_empty()) {
            Some(params) => {
                let query_string = params
                    .iter()
                    .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                    .collect::<Vec<_>>()
                    .join("&");

                format!("{}?{}", url, query_string)
            }
            None => url,
        }
    }

    /// `GET {base_url}/example`을 호출하고 JSON 본문을 검증 없이 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Value)` - 2xx 응답의 파싱된 JSON 본문
    /// * `Err(AppError::UpstreamStatus)` - 2xx 이외의 상태
    /// * `Err(AppError::RequestError)` - 응답을 받지 못함
    /// * `Err(AppError::BadUpstreamResponse)` - 본문이 JSON이 아님
    pub async fn get_example(&self, params: Option<&BTreeMap<String, String>>) -> AppResult<Value> {
        let url = self.example_url(params);
        info!("Sending GET request to {}", url);

        let client = upstream::build_client(self.timeout)?;

        let response = client.get(&url).send().await.map_err(|e| {
            error!("외부 서비스 요청 실패 - url: {}, 에러: {}", url, e);
            AppError::RequestError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("외부 서비스 응답 에러 - url: {}, 상태: {}", url, status);

            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                detail: format!(
                    "External service error: {}",
                    upstream::error_detail(status, &body)
                ),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::BadUpstreamResponse(format!("외부 서비스 응답 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_url_without_params() {
        let client = ExternalServiceClient::new("https://x");

        assert_eq!(client.example_url(None), "https://x/example");
        assert_eq!(client.example_url(Some(&BTreeMap::new())), "https://x/example");
    }

    #[test]
    fn test_example_url_with_params() {
        let client = ExternalServiceClient::new("https://x/");
        let mut params = BTreeMap::new();
        params.insert("b".to_string(), "two words".to_string());
        params.insert("a".to_string(), "1".to_string());

        assert_eq!(client.base_url(), "https://x");
        assert_eq!(
            client.example_url(Some(&params)),
            "https://x/example?a=1&b=two%20words"
        );
    }
}
