//! 로그인 릴레이 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! `POST /login` 요청을 업스트림 인증 서비스로 전달합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use login_relay::config::{CorsConfig, Environment, ServerConfig};
use login_relay::routes::configure_all_routes;
use login_relay::services::auth::LoginService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (profile, env_file) = load_env_file();
    init_logging();

    info!("Current profile: {}", profile);
    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 로그인 릴레이 서비스 시작중...");

    let environment = Environment::current();
    info!("실행 환경: {:?}", environment);

    let login_service = web::Data::new(LoginService::from_env());
    info!(
        "업스트림: {} (타임아웃 {:?})",
        login_service.login_url(),
        login_service.timeout()
    );

    if environment.is_production() && !login_service.redacts_password() {
        warn!("요청 로그에 비밀번호가 평문으로 기록됩니다. LOG_REDACT_PASSWORD=true 로 가릴 수 있습니다");
    }

    start_http_server(login_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(login_service: web::Data<LoginService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: POST http://{}/login", bind_address);

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(login_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `.env` 파일의 `RUST_LOG`를 반영하기 위해 로거보다 먼저 호출되며,
/// 로드 결과는 로거 초기화 후 출력할 수 있도록 반환합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> (String, Result<&'static str, dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    (profile, loaded)
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=login_relay::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
