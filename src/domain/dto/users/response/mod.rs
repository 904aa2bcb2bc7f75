//! # 사용자 관련 응답 DTO 모듈
//!
//! 업스트림에서 받은 사용자 레코드를 검증된 스키마로 표현합니다.
//!
//! ## 응답 예시
//!
//! ```json
//! {
//!   "id": "3f2b8c1e-5d4a-4e2b-9a7c-1b2c3d4e5f60",
//!   "account_id": "student01",
//!   "password": "...",
//!   "name": "홍길동",
//!   "grade": 2,
//!   "class_num": 3,
//!   "num": 14,
//!   "user_role": "STU",
//!   "club_name": null,
//!   "profileImageUrl": null,
//!   "birthDay": "2007-03-01"
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 필드**: 업스트림 계약에 포함되어 있어 그대로 전달됩니다

pub mod user_response;

pub use user_response::UserResponse;
