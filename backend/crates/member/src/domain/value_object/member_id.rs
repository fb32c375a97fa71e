use kernel::id::Id;

pub struct MemberMarker;
pub type MemberId = Id<MemberMarker>;
