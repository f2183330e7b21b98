//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use store_common::{AppConfig, AppError, JwtService};
use store_db::{create_pool, migrations_dir, run_migrations, PoolConfig};
use store_service::{AuthService, ImageStore, ServiceContext};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::middleware::{apply_middleware_with_config, render_error_detail, require_auth};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Room left in a request body for the text fields next to the image
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config().clone();
    let body_limit = config.storage.max_file_size_bytes() + FORM_OVERHEAD_BYTES;

    let mut router = create_router()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(DefaultBodyLimit::max(body_limit));

    if state.exposes_error_detail() {
        router = router.layer(middleware::from_fn(render_error_detail));
    }

    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(router
        // Health checks stay reachable when the rate limit is exhausted
        .merge(health_routes())
        .nest_service("/uploads", ServeDir::new(&config.storage.upload_dir))
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, &migrations_dir())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let image_store = ImageStore::new(
        &config.storage.upload_dir,
        config.storage.max_file_size_bytes(),
    );
    image_store
        .ensure_dir()
        .await
        .map_err(|e| AppError::Storage(format!("{}: {}", image_store.dir().display(), e)))?;

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expiry));

    let service_context =
        ServiceContext::with_postgres(pool, jwt_service, Arc::new(image_store));

    if let Some(admin) = &config.admin {
        let created = AuthService::new(&service_context)
            .ensure_admin(admin)
            .await
            .map_err(AppError::from)?;
        if created {
            info!(email = %admin.email, "Bootstrap administrator created");
        }
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address {}: {}", address, e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
