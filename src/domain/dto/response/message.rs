//! 응답 봉투의 `message` 필드 타입

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// 사람이 읽는 진단용 메시지
///
/// 단순 문자열이거나 구조화된 JSON 값일 수 있습니다.
/// 태그 없이 직렬화되므로 JSON 문자열은 `Text`로, 그 밖의 값은
/// `Structured`로 역직렬화됩니다. 메시지가 없으면 봉투에서 `None`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeMessage {
    Text(String),
    Structured(StructuredMessage),
}

/// 문자열도 `null`도 아닌 JSON 값
///
/// 문자열은 [`EnvelopeMessage::Text`]로, `null`은 메시지 없음으로 표현되므로
/// 여기에는 들어올 수 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct StructuredMessage(Value);

/// 구조화 메시지로 쓸 수 없는 JSON 값
#[derive(Debug, Error, PartialEq)]
pub enum StructuredMessageError {
    #[error("null is not a message")]
    Null,
    #[error("string messages must be text messages")]
    String,
}

impl StructuredMessage {
    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl TryFrom<Value> for StructuredMessage {
    type Error = StructuredMessageError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Err(StructuredMessageError::Null),
            Value::String(_) => Err(StructuredMessageError::String),
            other => Ok(Self(other)),
        }
    }
}

impl EnvelopeMessage {
    /// JSON 값을 메시지로 변환합니다.
    ///
    /// 문자열은 `Text`, `null`은 `None`, 그 밖의 값은 `Structured`가 됩니다.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(EnvelopeMessage::Text(text)),
            other => Some(EnvelopeMessage::Structured(StructuredMessage(other))),
        }
    }

    /// 텍스트 메시지라면 그 내용을 반환합니다.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EnvelopeMessage::Text(text) => Some(text),
            EnvelopeMessage::Structured(_) => None,
        }
    }

    /// 구조화 메시지라면 그 JSON 값을 반환합니다.
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            EnvelopeMessage::Text(_) => None,
            EnvelopeMessage::Structured(structured) => Some(structured.value()),
        }
    }
}

impl From<&str> for EnvelopeMessage {
    fn from(text: &str) -> Self {
        EnvelopeMessage::Text(text.to_string())
    }
}

impl From<String> for EnvelopeMessage {
    fn from(text: String) -> Self {
        EnvelopeMessage::Text(text)
    }
}

impl From<StructuredMessage> for EnvelopeMessage {
    fn from(structured: StructuredMessage) -> Self {
        EnvelopeMessage::Structured(structured)
    }
}

impl From<EnvelopeMessage> for Value {
    fn from(message: EnvelopeMessage) -> Self {
        match message {
            EnvelopeMessage::Text(text) => Value::String(text),
            EnvelopeMessage::Structured(structured) => structured.into_value(),
        }
    }
}
