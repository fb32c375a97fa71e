//! Repository Traits
//!
//! The member directory. Implementation is in infrastructure layer.
//!
//! Storage must enforce uniqueness of login id and email itself; the
//! workflow pre-checks only to report a friendlier error.

use crate::domain::entity::member::Member;
use crate::domain::value_object::{email::Email, login_id::LoginId};
use crate::error::MemberResult;

/// Member directory trait
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// Insert a member without identity (returned with the assigned one),
    /// or update the stored row of a member that has one.
    ///
    /// A uniqueness violation surfaces as `DuplicateLoginId` / `DuplicateEmail`.
    async fn save(&self, member: Member) -> MemberResult<Member>;

    /// Find member by login id
    async fn find_by_login_id(&self, login_id: &LoginId) -> MemberResult<Option<Member>>;

    async fn exists_by_login_id(&self, login_id: &LoginId) -> MemberResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> MemberResult<bool>;
}
