use kernel::id::Id;

pub struct BoardMarker;
pub type BoardId = Id<BoardMarker>;
