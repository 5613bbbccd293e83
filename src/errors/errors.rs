//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패 경로가
//! 성공 응답과 같은 [`ResponseEnvelope`] 모양으로 클라이언트에게 전달되도록 합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "status": 404, "error": "Not found: user 7" }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_user(id: i64) -> Result<UserSummary, AppError> {
//!     lookup(id).ok_or_else(|| AppError::NotFound(format!("user {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::dto::ResponseEnvelope;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 고정된 HTTP 상태 코드에 대응하며,
/// 자동으로 실패 응답 봉투로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 설정 누락/오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    /// 실패 응답 봉투를 JSON으로 내려보냅니다.
    fn error_response(&self) -> HttpResponse {
        let status = AppError::status_code(self);

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        } else {
            log::debug!("클라이언트 에러 응답: {}", self);
        }

        let envelope: ResponseEnvelope<()> = ResponseEnvelope::failure(status.as_u16(), self.to_string());
        HttpResponse::build(status).json(envelope)
    }
}

impl<T> From<AppError> for ResponseEnvelope<T> {
    fn from(error: AppError) -> Self {
        ResponseEnvelope::failure(error.status_code().as_u16(), error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
