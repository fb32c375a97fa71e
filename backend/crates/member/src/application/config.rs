//! Application Configuration
//!
//! Configuration for the Member application layer.

use platform::password::{MIN_COST, PasswordCodec, PasswordHashError};

/// Member application configuration
#[derive(Debug, Clone, Default)]
pub struct MemberConfig {
    /// bcrypt codec used for registration and password changes
    pub password_codec: PasswordCodec,
}

impl MemberConfig {
    /// Config with an explicit bcrypt cost (4..=31)
    pub fn from_cost(bcrypt_cost: u32) -> Result<Self, PasswordHashError> {
        Ok(Self {
            password_codec: PasswordCodec::new(bcrypt_cost)?,
        })
    }

    /// Create config for development (cheapest bcrypt cost)
    pub fn development() -> Self {
        Self {
            password_codec: PasswordCodec::new(MIN_COST).unwrap_or_default(),
        }
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.password_codec.cost()
    }
}
