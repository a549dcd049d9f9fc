use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galleria_api::cache::ResponseCache;
use galleria_api::config::ServerConfig;
use galleria_api::counters::ViewCounter;
use galleria_api::middleware::rate_limit::FixedWindowLimiter;
use galleria_api::state::AppState;
use galleria_api::{background, router};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galleria_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = galleria_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    galleria_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    galleria_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Shared stores ---
    let response_cache = Arc::new(ResponseCache::new(Duration::from_secs(
        config.cache_ttl_secs,
    )));
    let view_counter = Arc::new(ViewCounter::new());
    let rate_limiter = Arc::new(FixedWindowLimiter::new(
        Duration::from_secs(config.rate_limit_window_secs),
        config.rate_limit_max_requests,
    ));

    // --- Background jobs ---
    let job_cancel = tokio_util::sync::CancellationToken::new();
    let flush_handle = tokio::spawn(background::view_flush::run(
        pool.clone(),
        Arc::clone(&view_counter),
        Duration::from_secs(config.view_flush_interval_secs),
        job_cancel.clone(),
    ));
    let sweep_handle = tokio::spawn(background::sweep::run(
        Arc::clone(&response_cache),
        Arc::clone(&rate_limiter),
        Duration::from_secs(config.store_sweep_interval_secs),
        job_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        response_cache,
        view_counter: Arc::clone(&view_counter),
        rate_limiter,
    };

    // --- Router ---
    let app = router::build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    job_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), flush_handle).await;
    let _ = tokio::time::timeout(Duration::from_secs(5), sweep_handle).await;

    // Final flush so buffered counts survive a clean restart.
    background::view_flush::flush_once(&pool, &view_counter).await;

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
