mod config;
mod routes;

use backend::policy;

use crate::config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    // Pages render with the config baked into the build, so log that one.
    match client::net::backend::config() {
        Ok(backend) => {
            tracing::info!(url = %backend.url, bucket = %backend.bucket, "backend configured");
            for warning in policy::images_bucket().startup_warnings(&backend.bucket) {
                tracing::warn!(bucket = %backend.bucket, "{warning}");
            }
        }
        Err(e) => tracing::warn!(error = %e, "backend not configured at build time; pages will show a configuration error"),
    }

    let app = routes::app().map_err(ServerError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| ServerError::Bind { port: config.port, source: e })?;

    tracing::info!(port = config.port, "imagedrop listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
