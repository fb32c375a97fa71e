//! Seed Admin Use Case
//!
//! Creates the configured administrator account if it does not exist yet.

use std::sync::Arc;

use crate::application::config::MemberConfig;
use crate::domain::entity::member::{Member, MemberProfile};
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::{email::Email, login_id::LoginId};
use crate::error::{MemberError, MemberResult};

/// Admin seed input
pub struct AdminSeedInput {
    pub login_id: String,
    pub password: String,
    pub nickname: String,
    pub email: String,
}

/// Seed admin use case
pub struct SeedAdminUseCase<R>
where
    R: MemberRepository,
{
    member_repo: Arc<R>,
    config: Arc<MemberConfig>,
}

impl<R> SeedAdminUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(member_repo: Arc<R>, config: Arc<MemberConfig>) -> Self {
        Self {
            member_repo,
            config,
        }
    }

    /// Returns `None` when the admin login id is already registered.
    /// An existing regular member under that id is left as is.
    pub async fn execute(&self, input: AdminSeedInput) -> MemberResult<Option<MemberProfile>> {
        let login_id = LoginId::new(input.login_id.as_str())?;

        if let Some(existing) = self.member_repo.find_by_login_id(&login_id).await? {
            if existing.is_admin() {
                tracing::info!(login_id = %login_id, "Admin account already present");
            } else {
                tracing::warn!(
                    login_id = %login_id,
                    "Admin login id is held by a regular member, no admin seeded"
                );
            }
            return Ok(None);
        }

        let email = Email::new(input.email.as_str())?;
        if self.member_repo.exists_by_email(&email).await? {
            return Err(MemberError::DuplicateEmail);
        }

        let admin = Member::register_admin(
            login_id.as_str(),
            input.password,
            &input.nickname,
            email.as_str(),
            &self.config.password_codec,
        )?;

        let admin = self.member_repo.save(admin).await?;
        let profile = MemberProfile::try_from(&admin)?;

        tracing::info!(
            member_id = %profile.member_id,
            login_id = %profile.login_id,
            "Admin account created"
        );

        Ok(Some(profile))
    }
}
