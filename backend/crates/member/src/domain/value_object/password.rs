//! Password Value Object
//!
//! 회원 비밀번호는 항상 해시 형태로만 보관한다. 생성 경로는 두 가지다.
//!
//! - [`Password::from_raw`]: 평문 검증 → bcrypt 해시 (가입, 비밀번호 변경)
//! - [`Password::from_hashed`]: 저장소에서 읽은 값을 그대로 감쌈 (재해시/검증 없음)
//!
//! 평문 비교 경로는 없다. bcrypt 형식이 아닌 저장 값은 어떤 입력과도 일치하지 않는다.

use std::fmt;

use kernel::validation::ValidationError;
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordCodec, PasswordHashError, PasswordPolicyError,
};
use thiserror::Error;

pub const PASSWORD_FIELD: &str = "password";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Policy(#[from] PasswordPolicyError),

    #[error(transparent)]
    Hash(#[from] PasswordHashError),
}

impl PasswordError {
    /// Field-level failure for policy violations; `None` for hashing faults
    pub fn to_validation_error(&self) -> Option<ValidationError> {
        match self {
            PasswordError::Policy(err) => {
                Some(ValidationError::new(PASSWORD_FIELD, err.to_string()))
            }
            PasswordError::Hash(_) => None,
        }
    }
}

/// Stored (hashed) member password
#[derive(Clone, PartialEq, Eq)]
pub struct Password(HashedPassword);

impl Password {
    /// Validate the strength policy, then hash
    pub fn from_raw(raw: String, codec: &PasswordCodec) -> Result<Self, PasswordError> {
        let clear = ClearTextPassword::new(raw)?;
        Self::from_clear_text(&clear, codec)
    }

    /// Hash an already policy-checked secret
    pub fn from_clear_text(
        clear: &ClearTextPassword,
        codec: &PasswordCodec,
    ) -> Result<Self, PasswordError> {
        Ok(Self(codec.hash(clear)?))
    }

    /// Wrap a value read back from storage
    pub fn from_hashed(stored: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(stored))
    }

    /// Whether the stored value carries a bcrypt version tag
    pub fn is_hashed(&self) -> bool {
        self.0.is_hashed()
    }

    /// Never fails; absent or empty candidates do not match
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        self.0.verify(candidate)
    }

    /// Stored representation, for persistence only
    pub fn as_hash_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
