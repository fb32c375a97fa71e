//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::board::Board;
use crate::domain::value_object::board_type::BoardType;

/// Create board request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBoardRequest {
    pub title: String,
    pub description: Option<String>,
    pub board_type: String,
}

/// Update board request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBoardRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Board response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub board_type: BoardType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            id: board.board_id().map(i64::from),
            title: board.title().to_string(),
            description: board.description().as_deref().map(str::to_string),
            board_type: board.board_type(),
            created_at: board.created_at(),
            updated_at: board.updated_at(),
        }
    }
}
