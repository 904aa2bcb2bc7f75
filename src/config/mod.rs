//! # Configuration Module
//!
//! 릴레이 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수에서 읽으며, 설정되지 않은 경우 안전한 기본값을 사용합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS 설정
//! - [`upstream_config`] - 업스트림 인증 서비스 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # 업스트림 설정
//! export UPSTREAM_LOGIN_URL="https://prod-server.xquare.app/dsm-login/user/user-data"
//! export UPSTREAM_TIMEOUT_SECS="5"
//! export LOG_REDACT_PASSWORD="false"
//! ```

pub mod data_config;
pub mod upstream_config;

pub use data_config::*;
pub use upstream_config::*;
