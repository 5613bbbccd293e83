//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터소스, 서버 바인딩 관련 설정을 관리합니다.

use std::env;

use super::http_config::parse_or_default;
use crate::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `APP_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`이 됩니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터
    ///
    /// 개발/테스트 환경은 debug, 스테이징/프로덕션은 info 레벨입니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 데이터소스 설정
///
/// Spring의 `spring.datasource.url` 프로퍼티에 해당합니다.
/// 시작 시 한 번 읽어서 `web::Data`로 핸들러에 공유합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceConfig {
    url: String,
}

impl DataSourceConfig {
    pub const URL_VAR: &'static str = "DATASOURCE_URL";

    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// `DATASOURCE_URL` 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 변수가 없거나 비어 있는 경우
    pub fn from_env() -> AppResult<Self> {
        Self::from_value(env::var(Self::URL_VAR).ok())
    }

    /// 이미 읽어 둔 값으로 설정을 만듭니다.
    pub fn from_value(value: Option<String>) -> AppResult<Self> {
        match value {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(AppError::ConfigurationError(format!(
                "{} must be set",
                Self::URL_VAR
            ))),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;

    /// 서버가 바인딩할 포트를 반환합니다. (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        Self::port_from(env::var("PORT").ok())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. (`HOST`, 기본값: "127.0.0.1")
    pub fn host() -> String {
        Self::host_from(env::var("HOST").ok())
    }

    /// HTTP 워커 스레드 수 (`SERVER_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        Self::workers_from(env::var("SERVER_WORKERS").ok())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    pub fn port_from(raw: Option<String>) -> u16 {
        parse_or_default("PORT", raw, Self::DEFAULT_PORT)
    }

    /// 비어 있는 값은 기본 호스트로 대체합니다.
    pub fn host_from(raw: Option<String>) -> String {
        raw.map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string())
    }

    /// 0은 허용하지 않습니다.
    pub fn workers_from(raw: Option<String>) -> usize {
        match parse_or_default("SERVER_WORKERS", raw, Self::DEFAULT_WORKERS) {
            0 => Self::DEFAULT_WORKERS,
            workers => workers,
        }
    }
}
