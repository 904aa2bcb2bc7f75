//! 사용자 도메인의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
