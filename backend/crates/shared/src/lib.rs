//! Shared Kernel - 도메인 공통 최소 코어
//!
//! 회원/게시판 도메인이 함께 쓰는 "가장 작은 코어"만 둔다:
//! - 공통 에러 타입과 Result 별칭
//! - 필드 단위 검증 실패 타입
//! - 저장소가 부여하는 식별자 타입
//!
//! 여기에는 도메인을 가로질러 의미가 바뀌지 않는 것만 넣는다.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod validation;
