//! 인증 이후 응답 본문에 실리는 사용자 요약 DTO
//!
//! 로그인/사용자 조회 흐름이 끝난 뒤 클라이언트에게 돌려주는
//! 최소한의 주체(principal) 정보입니다. 저장되거나 캐싱되지 않으며,
//! 응답 직렬화 직전에 한 번 만들어지고 버려집니다.
//!
//! # Wire Format
//!
//! ```json
//! { "id": 1, "fullName": "Ada Lovelace", "email": "ada@example.com", "roleName": "ADMIN" }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use classroom_backend::domain::dto::UserSummary;
//!
//! let user = UserSummary::builder()
//!     .id(1)
//!     .full_name("Ada Lovelace")
//!     .role_name("ADMIN")
//!     .build();
//!
//! assert_eq!(user.full_name(), "Ada Lovelace");
//! assert_eq!(user.email(), "");
//! ```

use serde::{Deserialize, Serialize};

/// 인증된 사용자 요약 정보
///
/// 필드는 비공개이며 접근자를 통해서만 읽을 수 있습니다.
/// 생성 이후에는 값을 바꿀 수 없는 값 객체입니다.
/// 이 계층에서는 이메일 형식이나 역할 이름을 검증하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    id: i64,
    full_name: String,
    email: String,
    role_name: String,
}

impl UserSummary {
    /// 모든 필드를 지정하여 사용자 요약을 생성합니다.
    pub fn new(
        id: i64,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            role_name: role_name.into(),
        }
    }

    /// 일부 필드만 지정할 수 있는 빌더를 반환합니다.
    ///
    /// 지정하지 않은 필드는 `0` 또는 빈 문자열이 됩니다.
    pub fn builder() -> UserSummaryBuilder {
        UserSummaryBuilder::default()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// 권한 역할 이름 (예: `ADMIN`, `TEACHER`)
    pub fn role_name(&self) -> &str {
        &self.role_name
    }
}

/// [`UserSummary`] 빌더
///
/// 각 setter는 빌더를 소비하고 다시 반환하며, `build()`로 마무리합니다.
#[derive(Debug, Clone, Default)]
pub struct UserSummaryBuilder {
    id: Option<i64>,
    full_name: Option<String>,
    email: Option<String>,
    role_name: Option<String>,
}

impl UserSummaryBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    pub fn build(self) -> UserSummary {
        UserSummary {
            id: self.id.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role_name: self.role_name.unwrap_or_default(),
        }
    }
}
