//! 인증 요청관련 DTO
//!
//! `POST /login`으로 들어오는 자격 증명을 매핑합니다.
use serde::Deserialize;

/// 로그인 요청 구조체
///
/// 두 필드 모두 필수 문자열입니다. 필드 누락이나 타입 불일치는
/// JSON 역직렬화 단계에서 거부됩니다. 빈 문자열은 그대로 업스트림에 전달됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "accountId")]
    pub account_id: String,

    pub password: String,
}
