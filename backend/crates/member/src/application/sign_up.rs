//! Sign Up Use Case
//!
//! Registers a new member account.

use std::sync::Arc;

use crate::application::config::MemberConfig;
use crate::domain::entity::member::{Member, MemberProfile};
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::{email::Email, login_id::LoginId};
use crate::error::{MemberError, MemberResult};

/// Sign up input
pub struct SignUpInput {
    pub login_id: String,
    pub password: String,
    pub nickname: String,
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: MemberRepository,
{
    member_repo: Arc<R>,
    config: Arc<MemberConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(member_repo: Arc<R>, config: Arc<MemberConfig>) -> Self {
        Self {
            member_repo,
            config,
        }
    }

    /// Login id is checked before email, both before any other field
    pub async fn execute(&self, input: SignUpInput) -> MemberResult<MemberProfile> {
        // Fail fast on malformed keys before touching storage
        let login_id = LoginId::new(input.login_id.as_str())?;
        let email = Email::new(input.email.as_str())?;

        if self.member_repo.exists_by_login_id(&login_id).await? {
            return Err(MemberError::DuplicateLoginId);
        }

        if self.member_repo.exists_by_email(&email).await? {
            return Err(MemberError::DuplicateEmail);
        }

        let member = Member::register_member(
            login_id.as_str(),
            input.password,
            &input.nickname,
            email.as_str(),
            &self.config.password_codec,
        )?;

        let member = self.member_repo.save(member).await?;
        let profile = MemberProfile::try_from(&member)?;

        tracing::info!(
            member_id = %profile.member_id,
            login_id = %profile.login_id,
            "Member signed up"
        );

        Ok(profile)
    }
}
