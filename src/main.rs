use std::sync::Arc;
use std::time::Duration;

use rank_badges::badge::{BadgeRenderer, FsAssets};
use rank_badges::config::Config;
use rank_badges::error::AppError;
use rank_badges::logging;
use rank_badges::rank::RankResolver;
use rank_badges::riot::{RiotClient, UpstreamMetrics};
use rank_badges::web::{self, AppState};
use tracing::{error, info};

const METRICS_LOG_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        error!(error = %e, "❌ Fatal error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    info!("🏅 Starting...");

    let metrics = UpstreamMetrics::new();
    tokio::spawn(metrics.clone().log_loop(METRICS_LOG_INTERVAL));

    let riot = RiotClient::new(config.riot_api_key.clone(), config.riot_timeout, metrics)?;
    let resolver = RankResolver::new(Arc::new(riot));

    let assets = FsAssets::load(config.assets_dir.clone());
    let renderer = BadgeRenderer::new(Arc::new(assets));

    web::serve(&config, AppState::new(resolver, renderer)).await
}
