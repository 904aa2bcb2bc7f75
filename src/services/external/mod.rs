//! 외부 서비스 연동 모듈
//!
//! 특정 엔드포인트에 묶이지 않은 범용 HTTP 클라이언트를 제공합니다.

pub mod external_service_client;

pub use external_service_client::ExternalServiceClient;
