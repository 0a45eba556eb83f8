use dioxus_logger::tracing;

use varietyz::{config::Config, error::Error, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Competition engine stopped: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    startup::seed_catalog(&db).await?;

    let state = startup::build_app_state(&config, db)?;
    let mut engine = startup::start_engine(state).await?;

    tracing::info!("Competition engine running");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }

    tracing::info!("Shutting down");
    engine.sched.shutdown().await?;

    Ok(())
}
