//! Use case and router tests for the board crate

use std::sync::{Arc, Mutex};

use crate::domain::entity::board::Board;
use crate::domain::repository::BoardRepository;
use crate::domain::value_object::board_id::BoardId;
use crate::error::{BoardError, BoardResult};

/// In-memory board repository
#[derive(Clone, Default)]
struct InMemoryBoardRepository {
    boards: Arc<Mutex<Vec<Board>>>,
}

impl BoardRepository for InMemoryBoardRepository {
    async fn save(&self, board: Board) -> BoardResult<Board> {
        let mut boards = self.boards.lock().unwrap();

        match board.board_id() {
            None => {
                let board = board.with_board_id(BoardId::from_raw(boards.len() as i64 + 1));
                boards.push(board.clone());
                Ok(board)
            }
            Some(board_id) => {
                let slot = boards
                    .iter_mut()
                    .find(|b| b.board_id() == Some(board_id))
                    .ok_or(BoardError::NotFound(board_id))?;
                *slot = board.clone();
                Ok(board)
            }
        }
    }

    async fn find_by_id(&self, board_id: BoardId) -> BoardResult<Option<Board>> {
        let boards = self.boards.lock().unwrap();
        Ok(boards
            .iter()
            .find(|b| b.board_id() == Some(board_id))
            .cloned())
    }

    async fn find_all(&self) -> BoardResult<Vec<Board>> {
        let mut boards = self.boards.lock().unwrap().clone();
        boards.sort_by_key(|b| b.board_id().map(i64::from));
        Ok(boards)
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;
    use crate::application::{
        CreateBoardInput, CreateBoardUseCase, GetBoardUseCase, ListBoardsUseCase,
        UpdateBoardInput, UpdateBoardUseCase,
    };
    use crate::domain::value_object::board_type::BoardType;

    fn create_input(title: &str, board_type: &str) -> CreateBoardInput {
        CreateBoardInput {
            title: title.to_string(),
            description: None,
            board_type: board_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = Arc::new(InMemoryBoardRepository::default());

        let created = CreateBoardUseCase::new(repo.clone())
            .execute(create_input("공지사항", "NOTICE"))
            .await
            .unwrap();
        let board_id = created.board_id().unwrap();

        let fetched = GetBoardUseCase::new(repo).execute(board_id).await.unwrap();
        assert_eq!(fetched.title().as_str(), "공지사항");
        assert_eq!(fetched.board_type(), BoardType::Notice);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_type() {
        let repo = Arc::new(InMemoryBoardRepository::default());

        let err = CreateBoardUseCase::new(repo.clone())
            .execute(create_input("자유", "BLOG"))
            .await
            .unwrap_err();

        let BoardError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(validation.field(), "boardType");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_board() {
        let repo = Arc::new(InMemoryBoardRepository::default());

        let err = GetBoardUseCase::new(repo)
            .execute(BoardId::from_raw(42))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "게시판을 찾을 수 없습니다. ID: 42");
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let repo = Arc::new(InMemoryBoardRepository::default());
        let create = CreateBoardUseCase::new(repo.clone());
        for (title, board_type) in [("공지", "NOTICE"), ("자유", "FREE"), ("질문", "QNA")] {
            create.execute(create_input(title, board_type)).await.unwrap();
        }

        let boards = ListBoardsUseCase::new(repo).execute().await.unwrap();
        let titles: Vec<&str> = boards.iter().map(|b| b.title().as_str()).collect();
        assert_eq!(titles, vec!["공지", "자유", "질문"]);
    }

    #[tokio::test]
    async fn test_update_keeps_type() {
        let repo = Arc::new(InMemoryBoardRepository::default());
        let created = CreateBoardUseCase::new(repo.clone())
            .execute(create_input("익명", "ANONYMOUS"))
            .await
            .unwrap();
        let board_id = created.board_id().unwrap();

        let updated = UpdateBoardUseCase::new(repo.clone())
            .execute(UpdateBoardInput {
                board_id,
                title: "익명 게시판".to_string(),
                description: Some("누구나".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.title().as_str(), "익명 게시판");
        assert_eq!(updated.board_type(), BoardType::Anonymous);

        let stored = GetBoardUseCase::new(repo).execute(board_id).await.unwrap();
        assert_eq!(stored.description().as_deref(), Some("누구나"));
    }

    #[tokio::test]
    async fn test_update_missing_board() {
        let repo = Arc::new(InMemoryBoardRepository::default());

        let err = UpdateBoardUseCase::new(repo)
            .execute(UpdateBoardInput {
                board_id: BoardId::from_raw(7),
                title: "제목".to_string(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(id) if id.value() == 7));
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::board_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_list_get_update() {
        let repo = InMemoryBoardRepository::default();
        let app = || board_router_generic(repo.clone());

        let (status, created) = send(
            app(),
            "POST",
            "/",
            Some(json!({ "title": "자유 게시판", "boardType": "FREE" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["boardType"], "FREE");
        assert!(created["description"].is_null());
        assert!(created["createdAt"].is_string());

        let (status, list) = send(app(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let (status, updated) = send(
            app(),
            "PUT",
            "/1",
            Some(json!({ "title": "잡담", "description": "아무 이야기" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "잡담");
        assert_eq!(updated["boardType"], "FREE");

        let (status, fetched) = send(app(), "GET", "/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["description"], "아무 이야기");
    }

    #[tokio::test]
    async fn test_missing_board_is_not_found() {
        let (status, body) =
            send(board_router_generic(InMemoryBoardRepository::default()), "GET", "/5", None)
                .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "게시판을 찾을 수 없습니다. ID: 5");
    }

    #[tokio::test]
    async fn test_invalid_title_is_bad_request() {
        let (status, body) = send(
            board_router_generic(InMemoryBoardRepository::default()),
            "POST",
            "/",
            Some(json!({ "title": "a", "boardType": "QNA" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "title");
        assert_eq!(body["message"], "제목은 2자 이상이어야 합니다.");
    }
}
