//! API DTOs (Data Transfer Objects)
//!
//! Missing request fields deserialize to empty strings so they surface as
//! the field's "required" validation message.

use serde::{Deserialize, Serialize};

use crate::domain::entity::member::MemberProfile;

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub login_id: String,
    pub password: String,
    pub nickname: String,
    pub email: String,
}

/// Log in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogInRequest {
    pub login_id: String,
    pub password: String,
}

/// Sign up / log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member_id: i64,
    pub login_id: String,
    pub nickname: String,
    pub email: String,
}

impl From<MemberProfile> for MemberResponse {
    fn from(profile: MemberProfile) -> Self {
        Self {
            member_id: profile.member_id.value(),
            login_id: profile.login_id,
            nickname: profile.nickname,
            email: profile.email,
        }
    }
}
