//! Password Hashing and Verification
//!
//! Credential codec built on bcrypt:
//! - Strength policy applied to clear-text input before hashing
//! - Salted, versioned hashes (`$2a$` / `$2b$` / `$2y$`)
//! - Constant-time verification (delegated to bcrypt)
//! - Zeroization of clear-text secrets on drop
//!
//! ## Examples
//! ```rust
//! use platform::password::{ClearTextPassword, PasswordCodec};
//!
//! let codec = PasswordCodec::new(4).unwrap();
//! let raw = ClearTextPassword::new("Passw0rd!".to_string()).unwrap();
//! let hashed = codec.hash(&raw).unwrap();
//!
//! assert!(hashed.is_hashed());
//! assert!(hashed.verify(Some("Passw0rd!")));
//! assert!(!hashed.verify(None));
//! ```

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest secret bcrypt hashes without truncation, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Number of character classes (letter, digit, special) a password must mix
pub const REQUIRED_CHARACTER_CLASSES: usize = 2;

/// Characters counted as "special" by the strength policy
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}',
    ';', '\'', ':', '.', ',', '<', '>', '?', '/',
];

/// Version tags that identify a bcrypt hash
pub const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

pub use bcrypt::DEFAULT_COST;

// ============================================================================
// Error Types
// ============================================================================

/// Password strength policy violations
///
/// Display strings are stable and surfaced verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Missing, empty or whitespace only
    #[error("비밀번호는 필수입니다.")]
    Empty,

    #[error("비밀번호는 최소 {min}자 이상이어야 합니다.")]
    TooShort { min: usize, actual: usize },

    /// bcrypt only reads the first 72 bytes
    #[error("비밀번호는 {max}바이트를 초과할 수 없습니다.")]
    TooLong { max: usize, actual: usize },

    /// Fewer than two of {letter, digit, special}
    #[error("비밀번호는 영문, 숫자, 특수문자 중 2종류 이상 포함해야 합니다.")]
    InsufficientVariety { required: usize, actual: usize },
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("bcrypt cost must be between 4 and 31 (got {0})")]
    InvalidCost(u32),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear-text password that passed the strength policy
///
/// Not `Clone`, redacted in `Debug`, wiped from memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate a raw secret
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// blank, then length (characters, then bytes), then character-class
    /// composition.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        let byte_count = raw.len();
        if byte_count > MAX_PASSWORD_BYTES {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: byte_count,
            });
        }

        let classes = character_classes(&raw);
        if classes < REQUIRED_CHARACTER_CLASSES {
            return Err(PasswordPolicyError::InsufficientVariety {
                required: REQUIRED_CHARACTER_CLASSES,
                actual: classes,
            });
        }

        Ok(Self(raw))
    }

    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Codec
// ============================================================================

/// bcrypt hashing with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCodec {
    cost: u32,
}

impl Default for PasswordCodec {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordCodec {
    pub fn new(cost: u32) -> Result<Self, PasswordHashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a validated password with a fresh random salt
    ///
    /// Two calls with the same input produce different strings; both verify.
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::non_truncating_hash(password.as_bytes(), self.cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }

    /// Verify a candidate against a stored hash. Never fails; mismatches,
    /// absent candidates and malformed hashes are all `false`.
    pub fn verify(candidate: Option<&str>, stored: &str) -> bool {
        HashedPassword::from_stored(stored).verify(candidate)
    }

    /// Whether `value` carries a recognised bcrypt version tag
    pub fn is_hashed(value: &str) -> bool {
        BCRYPT_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored form of a password
///
/// Built either by [`PasswordCodec::hash`] or from a value read back from
/// storage. The storage path trusts its input and does not re-hash it.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a value read from storage as-is
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn is_hashed(&self) -> bool {
        PasswordCodec::is_hashed(&self.hash)
    }

    /// Constant-time check of `candidate` against this hash
    ///
    /// A stored value that is not a bcrypt hash never matches, nor does a
    /// candidate longer than [`MAX_PASSWORD_BYTES`].
    pub fn verify(&self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate.filter(|c| !c.is_empty()) else {
            return false;
        };

        if !self.is_hashed() {
            return false;
        }

        bcrypt::non_truncating_verify(candidate, &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Count the character classes present: ASCII letter, ASCII digit, special
fn character_classes(password: &str) -> usize {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c));

    [has_letter, has_digit, has_special]
        .into_iter()
        .filter(|present| *present)
        .count()
}

// ============================================================================
// Tests
// ============================================================================
