use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum MemberRole {
    #[default]
    Member = 0,
    Admin = 1,
}

impl MemberRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            MemberRole::Member => "MEMBER",
            MemberRole::Admin => "ADMIN",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, MemberRole::Admin)
    }

    /// `None` for ids this build does not know
    #[inline]
    pub const fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(MemberRole::Member),
            1 => Some(MemberRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
