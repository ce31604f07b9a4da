use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use makerslab_db::store::{ContentStore, PgContentStore};
use makerslab_storage::{BlobStore, LocalBlobStore, S3BlobStore};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use makerslab_api::background;
use makerslab_api::config::{ServerConfig, UploadBackend};
use makerslab_api::router::build_app_router;
use makerslab_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "makerslab_api=debug,makerslab_db=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = makerslab_db::create_pool(&database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    makerslab_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    makerslab_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let store: Arc<dyn ContentStore> = Arc::new(PgContentStore::new(pool.clone()));

    // --- Upload backends ---
    let local_uploads = Arc::new(LocalBlobStore::new(&config.uploads.dir));
    tokio::fs::create_dir_all(local_uploads.root())
        .await
        .expect("Failed to create upload directory");

    let uploads: Arc<dyn BlobStore> = match config.uploads.backend {
        UploadBackend::Local => local_uploads.clone(),
        UploadBackend::S3 => {
            let bucket = config
                .uploads
                .s3_bucket
                .clone()
                .expect("S3_BUCKET must be set when UPLOAD_BACKEND=s3");
            Arc::new(S3BlobStore::from_env(bucket, &config.uploads.s3_key_prefix).await)
        }
    };
    tracing::info!(backend = ?config.uploads.backend, "Upload backend ready");

    // --- App state ---
    let state = AppState {
        store: Arc::clone(&store),
        uploads,
        local_uploads,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // --- Background work (after the listener is bound) ---
    let seed_store = Arc::clone(&store);
    tokio::spawn(async move {
        makerslab_db::seed::run(&*seed_store).await;
    });

    let cancel = CancellationToken::new();
    let keepalive_handle = tokio::spawn(background::keepalive::run(
        pool,
        Duration::from_secs(config.db_keepalive_secs),
        cancel.clone(),
    ));
    let cleanup_handle = tokio::spawn(background::session_cleanup::run(
        Arc::clone(&store),
        background::session_cleanup::CLEANUP_INTERVAL,
        cancel.clone(),
    ));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), keepalive_handle).await;
    let _ = tokio::time::timeout(Duration::from_secs(5), cleanup_handle).await;
    tracing::info!("Background tasks stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
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
