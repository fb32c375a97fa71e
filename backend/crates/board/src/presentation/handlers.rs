//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    CreateBoardInput, CreateBoardUseCase, GetBoardUseCase, ListBoardsUseCase, UpdateBoardInput,
    UpdateBoardUseCase,
};
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::board_id::BoardId;
use crate::error::BoardResult;
use crate::presentation::dto::{BoardResponse, CreateBoardRequest, UpdateBoardRequest};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<R>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/boards
pub async fn create_board<R>(
    State(state): State<BoardAppState<R>>,
    Json(req): Json<CreateBoardRequest>,
) -> BoardResult<(StatusCode, Json<BoardResponse>)>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateBoardUseCase::new(state.repo.clone());

    let input = CreateBoardInput {
        title: req.title,
        description: req.description,
        board_type: req.board_type,
    };

    let board = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(BoardResponse::from(&board))))
}

/// GET /api/boards
pub async fn list_boards<R>(
    State(state): State<BoardAppState<R>>,
) -> BoardResult<Json<Vec<BoardResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    let boards = ListBoardsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(boards.iter().map(BoardResponse::from).collect()))
}

/// GET /api/boards/{boardId}
pub async fn get_board<R>(
    State(state): State<BoardAppState<R>>,
    Path(board_id): Path<i64>,
) -> BoardResult<Json<BoardResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    let board = GetBoardUseCase::new(state.repo.clone())
        .execute(BoardId::from_raw(board_id))
        .await?;

    Ok(Json(BoardResponse::from(&board)))
}

/// PUT /api/boards/{boardId}
pub async fn update_board<R>(
    State(state): State<BoardAppState<R>>,
    Path(board_id): Path<i64>,
    Json(req): Json<UpdateBoardRequest>,
) -> BoardResult<Json<BoardResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateBoardUseCase::new(state.repo.clone());

    let input = UpdateBoardInput {
        board_id: BoardId::from_raw(board_id),
        title: req.title,
        description: req.description,
    };

    let board = use_case.execute(input).await?;

    Ok(Json(BoardResponse::from(&board)))
}
