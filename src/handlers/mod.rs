//! # HTTP Handlers
//!
//! 요청을 받아 응답을 만드는 핸들러 함수들입니다.
//! 라우트 등록은 [`crate::routes`]에서 담당합니다.

pub mod hello;
