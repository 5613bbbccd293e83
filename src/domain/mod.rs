//! # Domain Layer Module
//!
//! API 계약을 정의하는 도메인 계층입니다.
//! 현재는 영속 엔티티 없이 응답 DTO만 포함합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@ResponseBody` DTO | [`dto`] 모듈 | API 계약 정의 |
//! | Lombok `@Builder` | `builder()` + `build()` | 부분 초기화 |
//! | Lombok `@Getter` | 접근자 메서드 | 읽기 전용 접근 |

pub mod dto;

pub use dto::*;
