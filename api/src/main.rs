//! FIKSI API Server
//!
//! Backend for the FIKSI quiz/post platform: the homepage feed, published post
//! listings, member profiles, and signup/login forwarded to Supabase auth.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, DisabledIdentityProvider, PostgresPostRepository, PostgresUserRepository,
    SupabaseIdentityProvider,
};
use app::{AuthService, FeedService, ProfileService};
use config::Config;
use domain::ports::{IdentityProvider, PostRepository, UserRepository};

/// Application state shared across all handlers
///
/// Services sit over trait objects so tests can swap in in-memory ports.
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<dyn PostRepository>>,
    pub profile_service: Arc<ProfileService<dyn UserRepository>>,
    pub auth_service: Arc<AuthService<dyn IdentityProvider>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Signup/login routes, kept separate so `main` can put them behind the rate limiter
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/login", post(handlers::login))
}

/// Build the application router
fn build_router(state: AppState, auth: Router<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health))
        .route("/homepage", get(handlers::get_homepage))
        // Content
        .route("/feed", get(handlers::get_feed))
        .route("/posts", get(handlers::list_posts))
        // Profiles
        .route("/profile/:username", get(handlers::get_profile))
        .route("/users/:id", get(handlers::get_user_by_id))
        // Auth (forwarded to the identity provider)
        .route("/auth/health", get(handlers::auth_health))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/user", get(handlers::current_user))
        .merge(auth)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// CORS for the web frontend; credentials are allowed so origins must be explicit
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fiksi_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FIKSI API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_create_schema {
        ensure_schema(&db)
            .await
            .context("Failed to create database tables")?;
        tracing::info!("Database tables created/verified");
    }

    // Create adapters
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));

    let identity: Arc<dyn IdentityProvider> = match &config.supabase {
        Some(supabase) => Arc::new(SupabaseIdentityProvider::new(
            supabase.url.clone(),
            supabase.key.clone(),
        )),
        None => {
            tracing::warn!(
                "SUPABASE_URL/SUPABASE_KEY not set - auth endpoints will return 503"
            );
            Arc::new(DisabledIdentityProvider)
        }
    };

    // Create application services
    let feed_service = Arc::new(FeedService::new(post_repo).with_timeout(config.source_timeout));
    let profile_service = Arc::new(ProfileService::new(user_repo));
    let auth_service = Arc::new(AuthService::new(identity));

    // Create app state
    let state = AppState {
        feed_service,
        profile_service,
        auth_service,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let rate_limited_auth = auth_routes().layer(GovernorLayer {
        config: governor_config,
    });

    let app = build_router(state, rate_limited_auth);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
