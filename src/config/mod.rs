//! # Configuration Module
//!
//! 환경 변수 기반 설정을 관리하는 모듈입니다.
//! Spring Boot의 `application.properties`와 유사한 역할을 수행합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터소스, 서버 바인딩 설정
//! - [`http_config`] - Rate Limiting, CORS 설정
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//! | `DATASOURCE_URL` | (필수) | `spring.datasource.url`에 해당 |
//! | `HOST` / `PORT` | `127.0.0.1` / `8080` | 바인딩 주소 |
//! | `SERVER_WORKERS` | `4` | 워커 스레드 수 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |
//! | `CORS_ALLOWED_ORIGINS` | 로컬 프론트엔드 | 쉼표로 구분한 Origin 목록 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DataSourceConfig, ServerConfig};
//!
//! let datasource = DataSourceConfig::from_env()?;
//! let address = ServerConfig::bind_address();
//! ```

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
