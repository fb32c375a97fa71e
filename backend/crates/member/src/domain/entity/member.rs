//! Member Entity
//!
//! Aggregate root for a registered account.
//!
//! A `Member` is reached in one of two ways, both ending in the same shape
//! (validated fields, hashed password):
//! - `register_member` / `register_admin`: validate every input, hash the
//!   password. No identity until the directory saves it.
//! - `from_storage`: wrap values read back from the directory as-is.
//!
//! Change operations build the replacement value object first and assign it
//! only on success, so a failed change leaves the member untouched.

use platform::password::{ClearTextPassword, PasswordCodec};

use crate::domain::value_object::{
    email::Email, login_id::LoginId, member_id::MemberId, member_role::MemberRole,
    nickname::Nickname,
    password::{Password, PasswordError},
};
use crate::error::{MemberError, MemberResult};

/// Member aggregate
#[derive(Debug, Clone)]
pub struct Member {
    member_id: Option<MemberId>,
    login_id: LoginId,
    password: Password,
    nickname: Nickname,
    email: Email,
    role: MemberRole,
}

impl Member {
    /// Register a regular member
    pub fn register_member(
        login_id: &str,
        raw_password: String,
        nickname: &str,
        email: &str,
        codec: &PasswordCodec,
    ) -> MemberResult<Self> {
        Self::register(login_id, raw_password, nickname, email, MemberRole::Member, codec)
    }

    /// Register an administrator
    pub fn register_admin(
        login_id: &str,
        raw_password: String,
        nickname: &str,
        email: &str,
        codec: &PasswordCodec,
    ) -> MemberResult<Self> {
        Self::register(login_id, raw_password, nickname, email, MemberRole::Admin, codec)
    }

    fn register(
        login_id: &str,
        raw_password: String,
        nickname: &str,
        email: &str,
        role: MemberRole,
        codec: &PasswordCodec,
    ) -> MemberResult<Self> {
        let login_id = LoginId::new(login_id)?;
        let clear = ClearTextPassword::new(raw_password).map_err(PasswordError::from)?;
        let nickname = Nickname::new(nickname)?;
        let email = Email::new(email)?;

        // Hash last: the other fields are cheap to reject
        let password = Password::from_clear_text(&clear, codec)?;

        Ok(Self {
            member_id: None,
            login_id,
            password,
            nickname,
            email,
            role,
        })
    }

    /// Reconstitute a persisted member (no validation, no re-hash)
    pub fn from_storage(
        member_id: MemberId,
        login_id: LoginId,
        password: Password,
        nickname: Nickname,
        email: Email,
        role: MemberRole,
    ) -> Self {
        Self {
            member_id: Some(member_id),
            login_id,
            password,
            nickname,
            email,
            role,
        }
    }

    /// Attach the identity the directory assigned on insert
    pub fn with_member_id(mut self, member_id: MemberId) -> Self {
        self.member_id = Some(member_id);
        self
    }

    // ------------------------------------------------------------------------
    // Changes
    // ------------------------------------------------------------------------

    /// Replace the password; the old hash is discarded
    pub fn change_password(
        &mut self,
        raw_password: String,
        codec: &PasswordCodec,
    ) -> MemberResult<()> {
        let password = Password::from_raw(raw_password, codec)?;
        self.password = password;
        Ok(())
    }

    pub fn change_nickname(&mut self, nickname: &str) -> MemberResult<()> {
        let nickname = Nickname::new(nickname)?;
        self.nickname = nickname;
        Ok(())
    }

    pub fn change_email(&mut self, email: &str) -> MemberResult<()> {
        let email = Email::new(email)?;
        self.email = email;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Constant-time password check; empty candidates never match
    pub fn match_password(&self, candidate: &str) -> bool {
        self.password.matches(Some(candidate))
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn member_id(&self) -> Option<MemberId> {
        self.member_id
    }

    pub fn login_id(&self) -> &LoginId {
        &self.login_id
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }
}

/// Public projection of a persisted member. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub member_id: MemberId,
    pub login_id: String,
    pub nickname: String,
    pub email: String,
}

impl TryFrom<&Member> for MemberProfile {
    type Error = MemberError;

    fn try_from(member: &Member) -> MemberResult<Self> {
        let member_id = member
            .member_id()
            .ok_or_else(|| MemberError::Internal("member has no identity yet".to_string()))?;

        Ok(Self {
            member_id,
            login_id: member.login_id().to_string(),
            nickname: member.nickname().to_string(),
            email: member.email().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> PasswordCodec {
        PasswordCodec::new(4).unwrap()
    }

    fn registered() -> Member {
        Member::register_member("user1", "Passw0rd!".to_string(), "Nick1", "a@b.co", &codec())
            .unwrap()
    }

    fn field_of(err: MemberError) -> &'static str {
        match err {
            MemberError::Validation(v) => v.field(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_register_member() {
        let member = registered();
        assert!(!member.is_admin());
        assert_eq!(member.role(), MemberRole::Member);
        assert!(member.member_id().is_none());
        assert!(member.password().is_hashed());
        assert!(member.match_password("Passw0rd!"));
        assert!(!member.match_password("Passw0rd?"));
        assert!(!member.match_password(""));
    }

    #[test]
    fn test_register_admin() {
        let admin = Member::register_admin(
            "admin01",
            "Adm1n!pass".to_string(),
            "관리자",
            "admin@b.co",
            &codec(),
        )
        .unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.role(), MemberRole::Admin);
    }

    #[test]
    fn test_register_reports_first_invalid_field() {
        let err = Member::register_member("ab", "weak".to_string(), "!", "bad", &codec())
            .unwrap_err();
        assert_eq!(field_of(err), "loginId");

        let err = Member::register_member("user1", "weak".to_string(), "!", "bad", &codec())
            .unwrap_err();
        assert_eq!(field_of(err), "password");

        let err = Member::register_member("user1", "Passw0rd!".to_string(), "!", "bad", &codec())
            .unwrap_err();
        assert_eq!(field_of(err), "nickname");

        let err =
            Member::register_member("user1", "Passw0rd!".to_string(), "Nick1", "bad", &codec())
                .unwrap_err();
        assert_eq!(field_of(err), "email");
    }

    #[test]
    fn test_change_password() {
        let mut member = registered();
        member
            .change_password("N3wSecret!".to_string(), &codec())
            .unwrap();

        assert!(!member.match_password("Passw0rd!"));
        assert!(member.match_password("N3wSecret!"));
    }

    #[test]
    fn test_failed_change_leaves_member_untouched() {
        let mut member = registered();
        let before_hash = member.password().as_hash_str().to_string();

        let err = member.change_password("short".to_string(), &codec()).unwrap_err();
        assert_eq!(field_of(err), "password");
        assert_eq!(member.password().as_hash_str(), before_hash);
        assert!(member.match_password("Passw0rd!"));

        assert!(member.change_nickname("닉네임!").is_err());
        assert_eq!(member.nickname().as_str(), "Nick1");

        assert!(member.change_email("user@domain").is_err());
        assert_eq!(member.email().as_str(), "a@b.co");
    }

    #[test]
    fn test_change_nickname_and_email() {
        let mut member = registered();
        member.change_nickname("새닉네임").unwrap();
        member.change_email("new@example.com").unwrap();

        assert_eq!(member.nickname().as_str(), "새닉네임");
        assert_eq!(member.email().as_str(), "new@example.com");
        assert_eq!(member.login_id().as_str(), "user1");
        assert!(member.match_password("Passw0rd!"));
    }

    #[test]
    fn test_from_storage_trusts_values() {
        let member = Member::from_storage(
            MemberId::from_raw(7),
            LoginId::from_db("legacy_id"),
            Password::from_hashed("plainvalue"),
            Nickname::from_db("옛닉"),
            Email::from_db("old@example.com"),
            MemberRole::Admin,
        );

        assert_eq!(member.member_id(), Some(MemberId::from_raw(7)));
        assert_eq!(member.login_id().as_str(), "legacy_id");
        assert!(member.is_admin());
        assert!(!member.password().is_hashed());
        assert!(!member.match_password("plainvalue"));
    }

    #[test]
    fn test_profile_requires_identity() {
        let member = registered();
        assert!(matches!(
            MemberProfile::try_from(&member),
            Err(MemberError::Internal(_))
        ));

        let member = member.with_member_id(MemberId::from_raw(1));
        let profile = MemberProfile::try_from(&member).unwrap();
        assert_eq!(profile.member_id.value(), 1);
        assert_eq!(profile.login_id, "user1");
        assert_eq!(profile.nickname, "Nick1");
        assert_eq!(profile.email, "a@b.co");
    }
}
