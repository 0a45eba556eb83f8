use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;

use crate::{
    client::{build_http_client, discord::DiscordClient, wom::WomClient},
    config::Config,
    error::Error,
    model::app::{AppState, ChannelConfig, SignatureCache, WomGroup},
    scheduler::{rotation::RotationScheduler, start_scheduler, timer::CronRotationTimer},
    service::{catalog::MetricCatalog, reconcile::CompetitionReconciler},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the Wise Old Man and Discord clients and assemble the shared application state
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    let http_client = build_http_client(
        &config.user_agent,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    Ok(AppState {
        db,
        tracker: Arc::new(WomClient::new(http_client.clone(), &config.wom_api_url)),
        messenger: Arc::new(DiscordClient::new(
            http_client,
            &config.discord_api_url,
            &config.discord_bot_token,
        )),
        channels: ChannelConfig {
            sotw: config.sotw_channel_id.clone(),
            botw: config.botw_channel_id.clone(),
            hall_of_fame: config.hall_of_fame_channel_id.clone(),
        },
        wom_group: WomGroup {
            id: config.wom_group_id,
            verification_code: config.wom_group_secret.clone(),
        },
        signatures: SignatureCache::default(),
    })
}

/// Insert built-in metrics missing from the catalog
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<usize, Error> {
    let inserted = MetricCatalog::new(db).seed().await?;
    if inserted > 0 {
        tracing::info!("Seeded {} metric(s) into the catalog", inserted);
    }

    Ok(inserted)
}

/// Running engine: the cron scheduler and the rotation orchestrator it drives.
pub struct Engine {
    pub sched: JobScheduler,
    pub rotation: Arc<RotationScheduler>,
}

/// Reconcile with Wise Old Man, run the first rotation pass and start the periodic jobs
pub async fn start_engine(state: AppState) -> Result<Engine, Error> {
    let sched = JobScheduler::new().await?;
    let timer = Arc::new(CronRotationTimer::new(sched.clone()));
    let rotation = Arc::new(RotationScheduler::new(state.clone(), timer));

    let summary = CompetitionReconciler::new(&state).reconcile_all().await?;
    tracing::info!(
        "Startup reconciliation checked {} competition(s): {} updated, {} deleted, {} failed",
        summary.checked,
        summary.updated,
        summary.deleted,
        summary.failed
    );

    rotation.run().await;

    start_scheduler(&sched, &state, &rotation).await?;

    Ok(Engine { sched, rotation })
}
