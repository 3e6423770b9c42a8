use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use stockledger_core::ledger::LedgerRepositoryTrait;
use stockledger_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use stockledger_core::pricing::{PriceOracleTrait, SimulatedPriceOracle};
use stockledger_core::rewards::{RewardService, RewardServiceTrait};
use stockledger_storage_sqlite::db;
use stockledger_storage_sqlite::ledger::LedgerRepository;
use stockledger_storage_sqlite::rewards::RewardRepository;

pub struct AppState {
    pub reward_service: Arc<dyn RewardServiceTrait + Send + Sync>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub ledger_repository: Arc<dyn LedgerRepositoryTrait + Send + Sync>,
    pub price_oracle: Arc<dyn PriceOracleTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let reward_repository = Arc::new(RewardRepository::new(pool.clone(), writer.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone()));
    let price_oracle = Arc::new(SimulatedPriceOracle::new());

    let reward_service = Arc::new(RewardService::new(
        reward_repository.clone(),
        price_oracle.clone(),
    ));
    let portfolio_service = Arc::new(PortfolioService::new(
        reward_repository,
        price_oracle.clone(),
    ));

    Ok(Arc::new(AppState {
        reward_service,
        portfolio_service,
        ledger_repository,
        price_oracle,
    }))
}
