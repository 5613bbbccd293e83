//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 한 곳에서 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `GET` | `/hello` | [`handlers::hello::hello`] |

use actix_web::{get, web};
use serde_json::{json, Value};

use crate::domain::dto::ResponseEnvelope;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// `/hello` 핸들러는 `web::Data<DataSourceConfig>`가 앱에 등록되어 있어야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(datasource))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(handlers::hello::hello);
}

/// 서비스 상태 확인
///
/// 표준 응답 봉투에 서비스 정보를 담아 반환합니다.
#[get("/health")]
pub async fn health_check() -> ResponseEnvelope<Value> {
    ResponseEnvelope::success(
        200,
        json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    )
}
