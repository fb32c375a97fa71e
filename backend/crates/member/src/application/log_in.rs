//! Log In Use Case
//!
//! Checks a login id / password pair against the member directory.
//! Session handling is left to the caller.

use std::sync::Arc;

use crate::domain::entity::member::MemberProfile;
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::login_id::LoginId;
use crate::error::{MemberError, MemberResult};

/// Log in input
pub struct LogInInput {
    pub login_id: String,
    pub password: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: MemberRepository,
{
    member_repo: Arc<R>,
}

impl<R> LogInUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(member_repo: Arc<R>) -> Self {
        Self { member_repo }
    }

    /// Unknown login id and wrong password both yield `InvalidCredentials`
    pub async fn execute(&self, input: LogInInput) -> MemberResult<MemberProfile> {
        let login_id = LoginId::new(input.login_id)?;

        let member = self
            .member_repo
            .find_by_login_id(&login_id)
            .await?
            .filter(|member| member.match_password(&input.password))
            .ok_or(MemberError::InvalidCredentials)?;

        let profile = MemberProfile::try_from(&member)?;

        tracing::info!(member_id = %profile.member_id, "Member logged in");

        Ok(profile)
    }
}
