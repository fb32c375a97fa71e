//! Board Entity

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_object::{
    board_description::BoardDescription, board_id::BoardId, board_title::BoardTitle,
    board_type::BoardType,
};
use crate::error::BoardResult;

/// Board entity
///
/// The board type is fixed at creation; title and description change
/// together through [`Board::update_info`].
#[derive(Debug, Clone)]
pub struct Board {
    board_id: Option<BoardId>,
    title: BoardTitle,
    description: BoardDescription,
    board_type: BoardType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board (no identity until saved)
    pub fn create(
        title: &str,
        description: Option<String>,
        board_type: BoardType,
    ) -> BoardResult<Self> {
        let title = BoardTitle::new(title)?;
        let description = BoardDescription::new(description)?;
        let now = stamp();

        Ok(Self {
            board_id: None,
            title,
            description,
            board_type,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a persisted board
    pub fn from_storage(
        board_id: BoardId,
        title: BoardTitle,
        description: BoardDescription,
        board_type: BoardType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            board_id: Some(board_id),
            title,
            description,
            board_type,
            created_at,
            updated_at,
        }
    }

    /// Attach the identity storage assigned on insert
    pub fn with_board_id(mut self, board_id: BoardId) -> Self {
        self.board_id = Some(board_id);
        self
    }

    /// Replace title and description; nothing changes if either is invalid
    pub fn update_info(&mut self, title: &str, description: Option<String>) -> BoardResult<()> {
        let title = BoardTitle::new(title)?;
        let description = BoardDescription::new(description)?;

        self.title = title;
        self.description = description;
        self.updated_at = stamp();
        Ok(())
    }

    pub fn board_id(&self) -> Option<BoardId> {
        self.board_id
    }

    pub fn title(&self) -> &BoardTitle {
        &self.title
    }

    pub fn description(&self) -> &BoardDescription {
        &self.description
    }

    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Current time at the microsecond precision `TIMESTAMPTZ` keeps
fn stamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_create_board() {
        let board = Board::create(
            "공지사항",
            Some("운영 공지".to_string()),
            BoardType::Notice,
        )
        .unwrap();

        assert!(board.board_id().is_none());
        assert_eq!(board.title().as_str(), "공지사항");
        assert_eq!(board.description().as_deref(), Some("운영 공지"));
        assert_eq!(board.board_type(), BoardType::Notice);
        assert_eq!(board.created_at(), board.updated_at());
    }

    #[test]
    fn test_create_rejects_invalid_title() {
        let err = Board::create(" ", None, BoardType::Free).unwrap_err();
        let BoardError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(validation.field(), "title");
        assert_eq!(validation.message(), "제목은 공백이 불가합니다.");
    }

    #[test]
    fn test_update_info() {
        let mut board = Board::create("자유", None, BoardType::Free).unwrap();
        let created_at = board.created_at();

        board
            .update_info("자유 게시판", Some("아무 이야기".to_string()))
            .unwrap();

        assert_eq!(board.title().as_str(), "자유 게시판");
        assert_eq!(board.description().as_deref(), Some("아무 이야기"));
        assert_eq!(board.board_type(), BoardType::Free);
        assert_eq!(board.created_at(), created_at);
        assert!(board.updated_at() >= created_at);
    }

    #[test]
    fn test_failed_update_is_atomic() {
        let mut board = Board::create("질문", Some("Q&A".to_string()), BoardType::Qna).unwrap();
        let updated_at = board.updated_at();

        // Valid title, invalid description: neither is applied
        assert!(board.update_info("새 제목", Some("a".repeat(201))).is_err());
        assert_eq!(board.title().as_str(), "질문");
        assert_eq!(board.description().as_deref(), Some("Q&A"));
        assert_eq!(board.updated_at(), updated_at);
    }

    #[test]
    fn test_timestamps_fit_storage_precision() {
        let mut board = Board::create("자유", None, BoardType::Free).unwrap();
        assert_eq!(board.created_at().timestamp_subsec_nanos() % 1_000, 0);

        board.update_info("자유 게시판", None).unwrap();
        assert_eq!(board.updated_at().timestamp_subsec_nanos() % 1_000, 0);
        assert!(board.updated_at() >= board.created_at());
    }
}
