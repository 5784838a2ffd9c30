//! Account service: the HTTP collaborator the auth forms POST to.
//!
//! Routes keep the `.php` paths of the site it replaces so deployed
//! frontends don't need to change. Responses are a JSON envelope of
//! `status` + `message`; older frontends only substring-match the body,
//! which the success messages are worded to satisfy.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Response envelope shared by every route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Build the service router. CORS echoes an origin back only when it
/// exactly matches the allow-list; other origins get no CORS headers.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/signup.php", post(routes::signup))
        .route("/signin.php", post(routes::signin))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: config::ServerConfig) -> anyhow::Result<()> {
    let pool = db::connect(&config.database_url).await?;
    let state = AppState { pool };
    let app = router(state, &config.allowed_origins);

    let listener = TcpListener::bind(&config.bind).await?;
    info!("Account service listening on {}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
