//! 모든 핸들러가 공유하는 응답 봉투

pub mod envelope;
pub mod message;

pub use envelope::{Outcome, ResponseEnvelope, ResponseEnvelopeBuilder};
pub use message::{EnvelopeMessage, StructuredMessage, StructuredMessageError};
