//! # Domain Layer Module
//!
//! 릴레이가 다루는 데이터 형태를 정의합니다. 영속 엔티티는 없습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 인바운드 요청 / 검증된 응답 (LoginRequest, UserResponse)
//! └── Models  - 업스트림으로 보내는 페이로드 (LoginPayload)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
