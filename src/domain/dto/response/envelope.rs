//! # Response Envelope
//!
//! 모든 API 응답의 모양을 통일하는 제네릭 봉투 타입입니다.
//! 전송 계층 상태 코드를 본문에도 `status`로 실어 보내므로,
//! 클라이언트는 HTTP 상태를 따로 확인하지 않아도 됩니다.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "status": 200,
//!   "error": "...",     // 실패 시에만
//!   "message": "...",   // 문자열 또는 구조화된 값, 선택
//!   "data": { ... }     // 성공 시에만
//! }
//! ```
//!
//! 값이 없는 선택 필드는 직렬화 결과에서 아예 빠집니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use classroom_backend::domain::dto::{ResponseEnvelope, UserSummary};
//!
//! let user = UserSummary::new(1, "Ada Lovelace", "ada@example.com", "ADMIN");
//! let ok = ResponseEnvelope::success(200, user);
//! assert!(ok.is_success());
//!
//! let not_found: ResponseEnvelope<UserSummary> = ResponseEnvelope::failure(404, "user not found");
//! assert!(not_found.is_failure());
//! ```
//!
//! ## `error` / `data` 배타성
//!
//! 정상적인 응답은 `error`와 `data` 중 정확히 하나만 채워집니다.
//! [`ResponseEnvelope::success`] / [`ResponseEnvelope::failure`]는 항상 이 규칙을 지키지만,
//! [`ResponseEnvelope::new`]와 빌더는 생성 실패가 없도록 검사하지 않습니다.
//! [`ResponseEnvelope::is_well_formed`]와 [`ResponseEnvelope::outcome`]으로 확인하세요.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::EnvelopeMessage;

/// 표준 API 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default)]
    status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<EnvelopeMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

/// 봉투 내용을 성공/실패 관점에서 해석한 결과
#[derive(Debug, PartialEq)]
pub enum Outcome<'a, T> {
    /// `data`만 채워짐
    Success(&'a T),
    /// `error`만 채워짐
    Failure {
        error: &'a str,
        message: Option<&'a EnvelopeMessage>,
    },
    /// 둘 다 비어 있음
    Empty,
    /// 둘 다 채워짐 (호출자 규약 위반)
    Ambiguous,
}

impl<T> ResponseEnvelope<T> {
    /// 모든 필드를 직접 지정하여 봉투를 생성합니다.
    ///
    /// `error`와 `data`의 배타성은 검사하지 않습니다.
    pub fn new(
        status: u16,
        error: Option<String>,
        message: Option<EnvelopeMessage>,
        data: Option<T>,
    ) -> Self {
        Self {
            status,
            error,
            message,
            data,
        }
    }

    /// `status`만 정한 상태에서 시작하는 빌더를 반환합니다.
    pub fn builder(status: u16) -> ResponseEnvelopeBuilder<T> {
        ResponseEnvelopeBuilder {
            status,
            error: None,
            message: None,
            data: None,
        }
    }

    /// 성공 응답 (`error` 없음)
    pub fn success(status: u16, data: T) -> Self {
        Self::new(status, None, None, Some(data))
    }

    /// 실패 응답 (`data` 없음)
    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self::new(status, Some(error.into()), None, None)
    }

    /// 추가 메시지를 포함한 실패 응답
    ///
    /// `message`가 JSON `null`이면 메시지 없이 만들어집니다.
    pub fn failure_with_message(
        status: u16,
        error: impl Into<String>,
        message: impl Into<Value>,
    ) -> Self {
        Self::new(
            status,
            Some(error.into()),
            EnvelopeMessage::from_value(message.into()),
            None,
        )
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&EnvelopeMessage> {
        self.message.as_ref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// 봉투를 소비하고 페이로드를 꺼냅니다.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some() && self.data.is_none()
    }

    /// `error`와 `data` 중 정확히 하나만 채워져 있는지 확인합니다.
    pub fn is_well_formed(&self) -> bool {
        self.is_success() || self.is_failure()
    }

    pub fn outcome(&self) -> Outcome<'_, T> {
        match (&self.error, &self.data) {
            (None, Some(data)) => Outcome::Success(data),
            (Some(error), None) => Outcome::Failure {
                error,
                message: self.message.as_ref(),
            },
            (None, None) => Outcome::Empty,
            (Some(_), Some(_)) => Outcome::Ambiguous,
        }
    }

    /// 나머지 필드는 유지한 채 페이로드 타입을 변환합니다.
    pub fn map<U, F>(self, f: F) -> ResponseEnvelope<U>
    where
        F: FnOnce(T) -> U,
    {
        ResponseEnvelope {
            status: self.status,
            error: self.error,
            message: self.message,
            data: self.data.map(f),
        }
    }

    /// 전송 계층에 사용할 HTTP 상태 코드
    ///
    /// `status`가 유효한 HTTP 코드가 아니면 500을 반환합니다.
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        Self::new(0, None, None, None)
    }
}

/// [`ResponseEnvelope`] 빌더
#[derive(Debug, Clone)]
pub struct ResponseEnvelopeBuilder<T> {
    status: u16,
    error: Option<String>,
    message: Option<EnvelopeMessage>,
    data: Option<T>,
}

impl<T> ResponseEnvelopeBuilder<T> {
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// JSON `null`은 메시지를 비웁니다.
    pub fn message(mut self, message: impl Into<Value>) -> Self {
        self.message = EnvelopeMessage::from_value(message.into());
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> ResponseEnvelope<T> {
        ResponseEnvelope::new(self.status, self.error, self.message, self.data)
    }
}

impl<T: Serialize> Responder for ResponseEnvelope<T> {
    type Body = BoxBody;

    /// 본문의 `status`와 같은 HTTP 상태로 JSON 응답을 만듭니다.
    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.http_status()).json(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::UserSummary;
    use actix_web::test::TestRequest;
    use serde_json::json;

    fn ada() -> UserSummary {
        UserSummary::new(1, "Ada Lovelace", "ada@example.com", "ADMIN")
    }

    fn ada_json() -> serde_json::Value {
        json!({
            "id": 1,
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "roleName": "ADMIN"
        })
    }

    #[test]
    fn test_new_reads_back_every_field() {
        let envelope = ResponseEnvelope::new(
            200,
            Some("none".to_string()),
            Some(EnvelopeMessage::from("hello")),
            Some(ada()),
        );

        assert_eq!(envelope.status(), 200);
        assert_eq!(envelope.error(), Some("none"));
        assert_eq!(envelope.message().and_then(|m| m.as_text()), Some("hello"));
        assert_eq!(envelope.data(), Some(&ada()));
    }

    #[test]
    fn test_success_serializes_without_error_or_message() {
        let envelope = ResponseEnvelope::success(200, ada());

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": 200, "data": ada_json() })
        );
        assert!(envelope.is_success());
        assert_eq!(envelope.outcome(), Outcome::Success(&ada()));
    }

    #[test]
    fn test_failure_serializes_without_data() {
        let envelope: ResponseEnvelope<UserSummary> = ResponseEnvelope::failure(404, "user not found");

        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"status":404,"error":"user not found"}"#
        );
        assert!(envelope.is_failure());
        assert_eq!(
            envelope.outcome(),
            Outcome::Failure {
                error: "user not found",
                message: None
            }
        );
    }

    #[test]
    fn test_failure_with_structured_message() {
        let envelope: ResponseEnvelope<()> = ResponseEnvelope::failure_with_message(
            400,
            "validation failed",
            json!({ "field": "email" }),
        );

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": 400,
                "error": "validation failed",
                "message": { "field": "email" }
            })
        );
    }

    #[test]
    fn test_default_envelope_is_empty() {
        let envelope: ResponseEnvelope<UserSummary> = ResponseEnvelope::default();

        assert_eq!(envelope.status(), 0);
        assert!(envelope.error().is_none());
        assert!(envelope.message().is_none());
        assert!(envelope.data().is_none());
        assert_eq!(envelope.outcome(), Outcome::Empty);
        assert!(!envelope.is_well_formed());
        assert_eq!(serde_json::to_string(&envelope).unwrap(), r#"{"status":0}"#);
    }

    #[test]
    fn test_builder_partial_specification() {
        let failure: ResponseEnvelope<UserSummary> = ResponseEnvelope::builder(401)
            .error("invalid credentials")
            .build();
        let success = ResponseEnvelope::builder(200).data(ada()).message("welcome").build();

        assert_eq!(failure, ResponseEnvelope::failure(401, "invalid credentials"));
        assert!(failure.data().is_none());
        assert_eq!(success.data(), Some(&ada()));
        assert_eq!(success.message(), Some(&EnvelopeMessage::from("welcome")));
        assert!(success.is_well_formed());
    }

    #[test]
    fn test_both_error_and_data_is_ambiguous() {
        let envelope = ResponseEnvelope::builder(200).error("oops").data(ada()).build();

        assert_eq!(envelope.outcome(), Outcome::Ambiguous);
        assert!(!envelope.is_success());
        assert!(!envelope.is_failure());
        assert!(!envelope.is_well_formed());
    }

    #[test]
    fn test_roundtrip_with_user_summary() {
        let original = ResponseEnvelope::new(
            201,
            None,
            EnvelopeMessage::from_value(json!({ "created": true })),
            Some(ada()),
        );

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ResponseEnvelope<UserSummary> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_null_message_is_absent_and_roundtrips() {
        let original: ResponseEnvelope<UserSummary> = ResponseEnvelope::builder(400)
            .error("bad")
            .message(json!(null))
            .build();

        assert!(original.message().is_none());
        let encoded = serde_json::to_string(&original).unwrap();
        assert_eq!(encoded, r#"{"status":400,"error":"bad"}"#);

        let decoded: ResponseEnvelope<UserSummary> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_json_string_message_roundtrips_as_text() {
        let original: ResponseEnvelope<()> =
            ResponseEnvelope::failure_with_message(409, "conflict", json!("email taken"));

        assert_eq!(original.message(), Some(&EnvelopeMessage::from("email taken")));
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ResponseEnvelope<()> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_explicit_null_fields_decode_as_absent() {
        let decoded: ResponseEnvelope<UserSummary> =
            serde_json::from_str(r#"{"status":404,"error":"gone","message":null,"data":null}"#).unwrap();

        assert_eq!(decoded, ResponseEnvelope::failure(404, "gone"));
    }

    #[test]
    fn test_deserialize_payload_without_default() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Classroom {
            x: i32,
        }

        let decoded: ResponseEnvelope<Classroom> =
            serde_json::from_str(r#"{"status":200,"data":{"x":1}}"#).unwrap();
        assert_eq!(decoded.data(), Some(&Classroom { x: 1 }));

        let missing: ResponseEnvelope<Classroom> =
            serde_json::from_str(r#"{"status":500,"error":"down"}"#).unwrap();
        assert!(missing.data().is_none());
    }

    #[test]
    fn test_deserialize_missing_fields_as_absent() {
        let decoded: ResponseEnvelope<UserSummary> = serde_json::from_str("{}").unwrap();

        assert_eq!(decoded, ResponseEnvelope::default());
    }

    #[test]
    fn test_map_keeps_status_and_message() {
        let envelope = ResponseEnvelope::builder(200).data(ada()).message("ok").build();
        let mapped = envelope.map(|user| user.id());

        assert_eq!(mapped.status(), 200);
        assert_eq!(mapped.data(), Some(&1));
        assert_eq!(mapped.message(), Some(&EnvelopeMessage::from("ok")));
    }

    #[test]
    fn test_http_status_falls_back_to_500() {
        let envelope: ResponseEnvelope<()> = ResponseEnvelope::default();

        assert_eq!(envelope.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ResponseEnvelope::success(201, ()).http_status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_responder_uses_envelope_status() {
        let req = TestRequest::default().to_http_request();
        let envelope: ResponseEnvelope<UserSummary> = ResponseEnvelope::failure(404, "user not found");

        let response = envelope.respond_to(&req);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"status":404,"error":"user not found"}"#);
    }
}
