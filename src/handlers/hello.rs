//! 연결 확인용 Hello 엔드포인트
//!
//! | 메서드 | 경로 | 응답 |
//! |--------|------|------|
//! | `GET` | `/hello` | `200 text/plain`, `"hello"` + 데이터소스 URL |

use actix_web::{get, web, HttpResponse};

use crate::config::DataSourceConfig;

/// 고정 문자열 `hello` 뒤에 설정된 데이터소스 URL을 그대로 붙여 반환합니다.
///
/// # Endpoint
/// `GET /hello`
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/hello
/// # hellojdbc:postgresql://localhost:5432/classroom
/// ```
#[get("/hello")]
pub async fn hello(datasource: web::Data<DataSourceConfig>) -> HttpResponse {
    log::debug!("hello 요청 처리");

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("hello{}", datasource.url()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_hello_concatenates_datasource_url() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DataSourceConfig::new(
                    "jdbc:postgresql://localhost:5432/classroom",
                )))
                .service(hello),
        )
        .await;

        let req = test::TestRequest::get().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"hellojdbc:postgresql://localhost:5432/classroom");
    }

    #[actix_web::test]
    async fn test_hello_post_is_not_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DataSourceConfig::new("db")))
                .service(hello),
        )
        .await;

        let req = test::TestRequest::post().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        // `#[get]`은 리소스 단위 가드라서 다른 메서드는 매칭되지 않습니다.
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
