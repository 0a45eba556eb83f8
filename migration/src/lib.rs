pub use sea_orm_migration::prelude::*;

mod m20260301_000001_competition;
mod m20260301_000002_competition_vote;
mod m20260301_000003_metric;
mod m20260301_000004_competition_queue;
mod m20260301_000005_config_value;
mod m20260301_000006_competition_winner;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_competition::Migration),
            Box::new(m20260301_000002_competition_vote::Migration),
            Box::new(m20260301_000003_metric::Migration),
            Box::new(m20260301_000004_competition_queue::Migration),
            Box::new(m20260301_000005_config_value::Migration),
            Box::new(m20260301_000006_competition_winner::Migration),
        ]
    }
}
