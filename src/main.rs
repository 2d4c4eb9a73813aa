//! orders_analytics - order ledger statistics
//!
//! Loads the orders file named by `ORDERS_FILE`, runs every analytics query
//! and prints the report as JSON on stdout.

use orders_analytics::telemetry;
use orders_analytics::{AnalyticsReport, AppError, AppResult, Config, OrdersAnalytics, OrdersLoader};

fn run(config: &Config) -> AppResult<()> {
    tracing::info!("Loading orders from {}", config.orders_file.display());
    let snapshot = OrdersLoader::new(config.validation_rules()).load_file(&config.orders_file)?;

    let engine = OrdersAnalytics::new(snapshot);
    let report = AnalyticsReport::build(&engine);

    println!("{}", serde_json::to_string_pretty(&report)?);
    tracing::info!("Total order value: {}", report.total_order_value());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    telemetry::init_tracing(config.log_format);

    if let Err(e) = run(&config) {
        match &e {
            AppError::Load(load) if load.is_data_error() => tracing::error!("Rejected orders file: {}", e),
            _ => tracing::error!("{}", e),
        }
        return Err(e.into());
    }
    Ok(())
}
