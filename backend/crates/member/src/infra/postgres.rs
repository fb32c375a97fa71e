//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::member::Member;
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::{
    email::Email, login_id::LoginId, member_id::MemberId, member_role::MemberRole,
    nickname::Nickname, password::Password,
};
use crate::error::{MemberError, MemberResult};

/// Unique constraint names from the `members` migration
const LOGIN_ID_UNIQUE_CONSTRAINT: &str = "members_login_id_key";
const EMAIL_UNIQUE_CONSTRAINT: &str = "members_email_key";

/// PostgreSQL-backed member directory
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, member: Member) -> MemberResult<Member> {
        let member_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO members (
                login_id,
                password,
                nickname,
                email,
                member_role
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING member_id
            "#,
        )
        .bind(member.login_id().as_str())
        .bind(member.password().as_hash_str())
        .bind(member.nickname().as_str())
        .bind(member.email().as_str())
        .bind(member.role().id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(member.with_member_id(MemberId::from_raw(member_id)))
    }

    async fn update(&self, member_id: MemberId, member: Member) -> MemberResult<Member> {
        let rows = sqlx::query(
            r#"
            UPDATE members SET
                password = $2,
                nickname = $3,
                email = $4,
                updated_at = NOW()
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.value())
        .bind(member.password().as_hash_str())
        .bind(member.nickname().as_str())
        .bind(member.email().as_str())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?
        .rows_affected();

        if rows == 0 {
            return Err(MemberError::Internal(format!(
                "member {member_id} vanished before update"
            )));
        }

        Ok(member)
    }
}

impl MemberRepository for PgMemberRepository {
    async fn save(&self, member: Member) -> MemberResult<Member> {
        match member.member_id() {
            None => self.insert(member).await,
            Some(member_id) => self.update(member_id, member).await,
        }
    }

    async fn find_by_login_id(&self, login_id: &LoginId) -> MemberResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT
                member_id,
                login_id,
                password,
                nickname,
                email,
                member_role
            FROM members
            WHERE login_id = $1
            "#,
        )
        .bind(login_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_member()).transpose()
    }

    async fn exists_by_login_id(&self, login_id: &LoginId) -> MemberResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE login_id = $1)",
        )
        .bind(login_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> MemberResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM members WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

/// A unique violation the pre-check missed is still a duplicate
fn map_write_error(err: sqlx::Error) -> MemberError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(LOGIN_ID_UNIQUE_CONSTRAINT) => return MemberError::DuplicateLoginId,
                Some(EMAIL_UNIQUE_CONSTRAINT) => return MemberError::DuplicateEmail,
                _ => {}
            }
        }
    }
    MemberError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct MemberRow {
    member_id: i64,
    login_id: String,
    password: String,
    nickname: String,
    email: String,
    member_role: i16,
}

impl MemberRow {
    fn into_member(self) -> MemberResult<Member> {
        let role = MemberRole::from_id(self.member_role).ok_or_else(|| {
            MemberError::Internal(format!(
                "unknown member_role {} for member {}",
                self.member_role, self.member_id
            ))
        })?;

        Ok(Member::from_storage(
            MemberId::from_raw(self.member_id),
            LoginId::from_db(self.login_id),
            Password::from_hashed(self.password),
            Nickname::from_db(self.nickname),
            Email::from_db(self.email),
            role,
        ))
    }
}
