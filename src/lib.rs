//! 학원(클래스룸) 관리 백엔드
//!
//! Actix-web 기반 REST 백엔드의 공통 응답 계약을 제공합니다.
//! 모든 응답은 [`domain::dto::ResponseEnvelope`] 모양을 따르며,
//! 인증 이후의 사용자 정보는 [`domain::dto::UserSummary`]로 전달됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /hello
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Domain DTOs    │ ← ResponseEnvelope<T>, UserSummary
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use classroom_backend::domain::dto::{ResponseEnvelope, UserSummary};
//!
//! let user = UserSummary::new(1, "Ada Lovelace", "ada@example.com", "ADMIN");
//! let body = serde_json::to_string(&ResponseEnvelope::success(200, user)).unwrap();
//! assert!(body.starts_with(r#"{"status":200,"data":"#));
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
