//! 저장소 식별자
//!
//! 회원/게시판의 식별자는 저장소(BIGSERIAL)가 INSERT 시점에 부여한다.
//! 마커 타입으로 서로 다른 엔티티의 ID 가 섞이지 않게 한다.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// 타입 안전한 저장소 ID
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// pub struct MemberMarker;
/// type MemberId = Id<MemberMarker>;
///
/// let id = MemberId::from_raw(42);
/// assert_eq!(id.value(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// 저장소가 돌려준 값으로 생성
    pub const fn from_raw(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

// 마커 타입에 트레이트 바운드가 걸리지 않도록 derive 대신 직접 구현한다.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}
