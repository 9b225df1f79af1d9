use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use file_relay::{
    api,
    config::{Config, StorageBackend},
    object_store as obj,
    storage::Database,
    views::Views,
    AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match log_format.to_lowercase().as_str() {
        "gcp" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_stackdriver::layer())
                .init();
        }
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "file-relay starting");

    let config = Config::load()?;

    let db = Database::open(&config.node.data_dir)?;
    info!("Database opened at: {}", config.node.data_dir);

    let object_store: Arc<dyn obj::ObjectStore> = match config.storage.backend {
        StorageBackend::Local => {
            let store = obj::LocalStore::new(&config.storage.local_storage_path)?;
            info!(
                "Using local storage backend at: {}",
                config.storage.local_storage_path
            );
            Arc::new(store)
        }
        StorageBackend::S3 => {
            let s3 = config
                .storage
                .s3
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("S3_BUCKET is required when STORAGE_BACKEND=s3"))?;
            let store = obj::S3Store::new(s3)?;
            info!(bucket = %s3.bucket, region = %s3.region, "Using S3 storage backend");
            Arc::new(store)
        }
    };

    let views = Views::new()?;

    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        object_store,
        views,
    });

    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.node.bind_address).await?;
    info!(
        cdn = %config.delivery.cdn_base_url,
        "Listening on: {}", config.node.bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
