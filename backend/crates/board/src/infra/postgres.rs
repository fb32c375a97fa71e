//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::{
    board_description::BoardDescription, board_id::BoardId, board_title::BoardTitle,
    board_type::BoardType,
};
use crate::error::{BoardError, BoardResult};

/// PostgreSQL-backed board repository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BoardRepository for PgBoardRepository {
    async fn save(&self, board: Board) -> BoardResult<Board> {
        match board.board_id() {
            None => {
                let board_id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO boards (
                        title,
                        description,
                        board_type,
                        created_at,
                        updated_at
                    ) VALUES ($1, $2, $3, $4, $5)
                    RETURNING board_id
                    "#,
                )
                .bind(board.title().as_str())
                .bind(board.description().as_deref())
                .bind(board.board_type().code())
                .bind(board.created_at())
                .bind(board.updated_at())
                .fetch_one(&self.pool)
                .await?;

                Ok(board.with_board_id(BoardId::from_raw(board_id)))
            }
            Some(board_id) => {
                let rows = sqlx::query(
                    r#"
                    UPDATE boards SET
                        title = $2,
                        description = $3,
                        updated_at = $4
                    WHERE board_id = $1
                    "#,
                )
                .bind(board_id.value())
                .bind(board.title().as_str())
                .bind(board.description().as_deref())
                .bind(board.updated_at())
                .execute(&self.pool)
                .await?
                .rows_affected();

                if rows == 0 {
                    return Err(BoardError::NotFound(board_id));
                }

                Ok(board)
            }
        }
    }

    async fn find_by_id(&self, board_id: BoardId) -> BoardResult<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            SELECT
                board_id,
                title,
                description,
                board_type,
                created_at,
                updated_at
            FROM boards
            WHERE board_id = $1
            "#,
        )
        .bind(board_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_board()).transpose()
    }

    async fn find_all(&self) -> BoardResult<Vec<Board>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            r#"
            SELECT
                board_id,
                title,
                description,
                board_type,
                created_at,
                updated_at
            FROM boards
            ORDER BY board_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_board()).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BoardRow {
    board_id: i64,
    title: String,
    description: Option<String>,
    board_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BoardRow {
    fn into_board(self) -> BoardResult<Board> {
        let board_type = BoardType::from_code(&self.board_type).map_err(|_| {
            BoardError::Internal(format!(
                "unknown board_type {:?} for board {}",
                self.board_type, self.board_id
            ))
        })?;

        Ok(Board::from_storage(
            BoardId::from_raw(self.board_id),
            BoardTitle::from_db(self.title),
            BoardDescription::from_db(self.description),
            board_type,
            self.created_at,
            self.updated_at,
        ))
    }
}
