use serde::Serialize;

use crate::domain::dto::users::request::LoginRequest;

/// 업스트림으로 전송하는 로그인 페이로드
///
/// 항상 `{"accountId": ..., "password": ...}` 두 키만 직렬화됩니다.
#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    #[serde(rename = "accountId")]
    pub account_id: &'a str,
    pub password: &'a str,
}

impl<'a> LoginPayload<'a> {
    /// 로그 출력용 표현
    ///
    /// `redact_password`가 참이면 비밀번호를 `***`로 가립니다.
    pub fn to_log_string(&self, redact_password: bool) -> String {
        let password = if redact_password { "***" } else { self.password };

        serde_json::json!({
            "accountId": self.account_id,
            "password": password,
        })
        .to_string()
    }
}

impl<'a> From<&'a LoginRequest> for LoginPayload<'a> {
    fn from(request: &'a LoginRequest) -> Self {
        Self {
            account_id: &request.account_id,
            password: &request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LoginRequest {
        LoginRequest {
            account_id: "student01".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_payload_has_exactly_two_keys() {
        let request = request();
        let value = serde_json::to_value(LoginPayload::from(&request)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"accountId": "student01", "password": "secret"})
        );
    }

    #[test]
    fn test_log_string_redaction() {
        let request = request();
        let payload = LoginPayload::from(&request);

        assert!(payload.to_log_string(false).contains("secret"));

        let redacted = payload.to_log_string(true);
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("student01"));
    }
}
