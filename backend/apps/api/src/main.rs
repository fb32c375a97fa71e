//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are rendered
//! by each domain crate through `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
};
use board::{PgBoardRepository, board_router};
use member::application::{AdminSeedInput, SeedAdminUseCase};
use member::{MemberConfig, PgMemberRepository, member_router};
use platform::config::{AdminSeed, ServerConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,member=info,board=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let member_config = MemberConfig::from_cost(config.bcrypt_cost)?;
    let member_repo = PgMemberRepository::new(pool.clone());

    // Startup admin seeding
    // Errors here should not prevent server startup
    if let Some(seed) = config.admin_seed.clone() {
        seed_admin(member_repo.clone(), member_config.clone(), seed).await;
    }

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/members", member_router(member_repo, member_config))
        .nest("/api/boards", board_router(PgBoardRepository::new(pool)))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.bind_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn seed_admin(repo: PgMemberRepository, config: MemberConfig, seed: AdminSeed) {
    let use_case = SeedAdminUseCase::new(Arc::new(repo), Arc::new(config));

    let input = AdminSeedInput {
        login_id: seed.login_id,
        password: seed.password,
        nickname: seed.nickname,
        email: seed.email,
    };

    match use_case.execute(input).await {
        Ok(Some(profile)) => {
            tracing::info!(member_id = %profile.member_id, "Admin seed completed");
        }
        Ok(None) => {
            tracing::info!("Admin seed skipped, account exists");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Admin seed failed, continuing anyway");
        }
    }
}
