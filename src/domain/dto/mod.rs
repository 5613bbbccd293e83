//! # Data Transfer Objects
//!
//! HTTP 응답 본문으로 직렬화되는 타입들입니다.
//!
//! - [`ResponseEnvelope`] - 모든 응답의 공통 모양 (`status`, `error`, `message`, `data`)
//! - [`UserSummary`] - 인증된 사용자 요약, 주로 봉투의 `data`로 사용
//!
//! 두 타입 모두 요청 단위로 만들어지고 직렬화 후 버려지는 값 객체입니다.

pub mod response;
pub mod users;

pub use response::*;
pub use users::*;
