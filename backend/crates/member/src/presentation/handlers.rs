//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::MemberConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::MemberRepository;
use crate::error::MemberResult;
use crate::presentation::dto::{LogInRequest, MemberResponse, SignUpRequest};

/// Shared state for member handlers
#[derive(Clone)]
pub struct MemberAppState<R>
where
    R: MemberRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<MemberConfig>,
}

/// POST /api/members/signup
pub async fn sign_up<R>(
    State(state): State<MemberAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> MemberResult<Json<MemberResponse>>
where
    R: MemberRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        login_id: req.login_id,
        password: req.password,
        nickname: req.nickname,
        email: req.email,
    };

    let profile = use_case.execute(input).await?;

    Ok(Json(profile.into()))
}

/// POST /api/members/login
pub async fn log_in<R>(
    State(state): State<MemberAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> MemberResult<Json<MemberResponse>>
where
    R: MemberRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone());

    let input = LogInInput {
        login_id: req.login_id,
        password: req.password,
    };

    let profile = use_case.execute(input).await?;

    Ok(Json(profile.into()))
}
