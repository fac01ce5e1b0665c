use std::sync::Arc;

use crate::auth::{decode_secret_key, AuthConfig, AuthManager};
use crate::config::Config;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fintrack_core::{
    dashboard::{DashboardRepository, DashboardService, DashboardServiceTrait},
    db,
    expenses::{ExpenseRepository, ExpenseService, ExpenseServiceTrait},
    goals::{GoalRepository, GoalService, GoalServiceTrait},
    incomes::{IncomeRepository, IncomeService, IncomeServiceTrait},
    investments::{InvestmentRepository, InvestmentService, InvestmentServiceTrait},
    users::{UserRepository, UserService, UserServiceTrait},
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn resolve_jwt_secret(config: &Config) -> anyhow::Result<Vec<u8>> {
    match &config.secret_key {
        Some(raw) => decode_secret_key(raw),
        None => {
            // Ephemeral secret: every restart invalidates outstanding tokens.
            let mut secret = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            tracing::warn!(
                "FT_SECRET_KEY is not set; generated an ephemeral signing secret ({}...)",
                &BASE64.encode(&secret)[..8]
            );
            Ok(secret)
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Ensure DATABASE_URL aligns with FT_DB_PATH so core picks the right file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let user_repository = Arc::new(UserRepository::new(pool.clone()));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repository));

    let income_repository = Arc::new(IncomeRepository::new(pool.clone()));
    let income_service: Arc<dyn IncomeServiceTrait> =
        Arc::new(IncomeService::new(income_repository));

    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone()));
    let expense_service: Arc<dyn ExpenseServiceTrait> =
        Arc::new(ExpenseService::new(expense_repository));

    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone()));
    let investment_service: Arc<dyn InvestmentServiceTrait> =
        Arc::new(InvestmentService::new(investment_repository));

    let goal_repository = Arc::new(GoalRepository::new(pool.clone()));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repository));

    let dashboard_repository = Arc::new(DashboardRepository::new(pool.clone()));
    let dashboard_service: Arc<dyn DashboardServiceTrait> =
        Arc::new(DashboardService::new(dashboard_repository));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: resolve_jwt_secret(config)?,
        access_token_ttl: config.token_ttl,
    })?);

    Ok(Arc::new(AppState {
        user_service,
        income_service,
        expense_service,
        investment_service,
        goal_service,
        dashboard_service,
        auth,
    }))
}
