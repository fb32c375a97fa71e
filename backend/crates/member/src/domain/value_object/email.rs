//! Email Value Object
//!
//! `local@domain.tld` 형식만 검사한다. 실제 수신 가능 여부는 확인하지 않는다.
//!
//! - local: 영문/숫자로 시작하고 끝남, 중간에 `.` `_` `+` `-` 허용
//! - domain: `.` 으로 구분된 라벨. 각 라벨은 비어있지 않고 영문/숫자로 시작하고 끝나며
//!   중간에 `-` 허용
//! - 마지막 라벨(TLD)은 2자 이상의 영문

use std::fmt;

use kernel::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAIL_FIELD: &str = "email";

const LOCAL_PART_SPECIAL_CHARS: &[char] = &['.', '_', '+', '-'];

const TLD_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("이메일은 필수입니다.")]
    Empty,

    #[error("유효한 이메일 형식이 아닙니다.")]
    InvalidFormat,
}

impl From<EmailError> for ValidationError {
    fn from(err: EmailError) -> Self {
        ValidationError::new(EMAIL_FIELD, err.to_string())
    }
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // Exactly one @
        if domain.contains('@') {
            return false;
        }

        Self::is_valid_local_part(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local_part(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().next_back()) else {
            return false;
        };

        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIAL_CHARS.contains(&c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        if !labels.iter().all(|label| Self::is_valid_label(label)) {
            return false;
        }

        let tld = labels[labels.len() - 1];
        tld.len() >= TLD_MIN_LENGTH && tld.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn is_valid_label(label: &str) -> bool {
        let (Some(first), Some(last)) = (label.chars().next(), label.chars().next_back()) else {
            return false;
        };

        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
