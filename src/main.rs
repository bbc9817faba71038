use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::services::activities_service::ActivitiesService;
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;

    let service = ActivitiesService::seeded(config.signup_policy);
    info!(
        activities = service.list().await.len(),
        enforce_capacity = config.signup_policy.enforce_capacity,
        "activity registry seeded"
    );

    let app = web::build_router(service, &config.static_dir);

    // Try the configured port first, then PORT + 1.
    let addr = config.socket_addr(config.port)?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.socket_addr(config.port.saturating_add(1))?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
