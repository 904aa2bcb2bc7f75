use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// 업스트림 인증 서비스가 반환하는 사용자 레코드
///
/// 업스트림 응답 본문을 이 타입으로 역직렬화하는 것이 곧 스키마 검증입니다.
/// 필수 필드가 없거나 타입이 맞지 않으면 생성에 실패합니다.
/// 정수 필드는 `"2"`처럼 숫자 문자열로 와도 받아들이고, 출력은 항상 정수입니다.
/// 알 수 없는 추가 필드는 무시되고, 선택 필드가 없으면 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub account_id: String,
    pub password: String,
    pub name: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub grade: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub class_num: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub num: i64,
    pub user_role: String,
    pub club_name: Option<String>,

    #[serde(rename = "profileImageUrl")]
    pub profile_image_url: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(rename = "birthDay")]
    pub birth_day: NaiveDate,
}

/// 정수 또는 정수 문자열을 `i64`로 읽습니다.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upstream_body() -> serde_json::Value {
        json!({
            "id": "3f2b8c1e-5d4a-4e2b-9a7c-1b2c3d4e5f60",
            "account_id": "student01",
            "password": "hashed",
            "name": "홍길동",
            "grade": 2,
            "class_num": 3,
            "num": 14,
            "user_role": "STU",
            "club_name": "DMS",
            "profileImageUrl": null,
            "birthDay": "2007-03-01"
        })
    }

    #[test]
    fn test_parse_full_record() {
        let user: UserResponse = serde_json::from_value(upstream_body()).unwrap();

        assert_eq!(user.account_id, "student01");
        assert_eq!(user.grade, 2);
        assert_eq!(user.club_name.as_deref(), Some("DMS"));
        assert_eq!(user.profile_image_url, None);
        assert_eq!(user.birth_day, NaiveDate::from_ymd_opt(2007, 3, 1).unwrap());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut body = upstream_body();
        let object = body.as_object_mut().unwrap();
        object.remove("club_name");
        object.remove("profileImageUrl");

        let user: UserResponse = serde_json::from_value(body).unwrap();
        let output = serde_json::to_value(&user).unwrap();

        assert_eq!(output["club_name"], serde_json::Value::Null);
        assert_eq!(output["profileImageUrl"], serde_json::Value::Null);
    }

    #[test]
    fn test_missing_birth_day_fails() {
        let mut body = upstream_body();
        body.as_object_mut().unwrap().remove("birthDay");

        let error = serde_json::from_value::<UserResponse>(body).unwrap_err();
        assert!(error.to_string().contains("birthDay"));
    }

    #[test]
    fn test_invalid_uuid_and_grade_type_fail() {
        let mut body = upstream_body();
        body["id"] = json!("not-a-uuid");
        assert!(serde_json::from_value::<UserResponse>(body).is_err());

        let mut body = upstream_body();
        body["grade"] = json!("two");
        assert!(serde_json::from_value::<UserResponse>(body).is_err());
    }

    #[test]
    fn test_numeric_strings_are_accepted_as_integers() {
        let mut body = upstream_body();
        body["grade"] = json!("2");
        body["class_num"] = json!(" 3 ");

        let user: UserResponse = serde_json::from_value(body).unwrap();
        let output = serde_json::to_value(&user).unwrap();

        assert_eq!(user.grade, 2);
        assert_eq!(user.class_num, 3);
        assert_eq!(output["grade"], json!(2));
    }

    #[test]
    fn test_extra_fields_are_ignored_and_output_keeps_field_names() {
        let mut body = upstream_body();
        body["unexpected"] = json!(true);

        let user: UserResponse = serde_json::from_value(body.clone()).unwrap();
        let output = serde_json::to_value(&user).unwrap();

        body.as_object_mut().unwrap().remove("unexpected");
        assert_eq!(output, body);
    }
}
