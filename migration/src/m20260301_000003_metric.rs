use sea_orm_migration::{prelude::*, schema::*};

static IDX_METRIC_KIND: &str = "idx-metric-kind";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metric::Table)
                    .if_not_exists()
                    .col(string(Metric::Name).primary_key())
                    .col(string_len(Metric::Kind, 5))
                    .col(timestamp_null(Metric::LastSelectedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_METRIC_KIND)
                    .table(Metric::Table)
                    .col(Metric::Kind)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_METRIC_KIND).table(Metric::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Metric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Metric {
    Table,
    Name,
    Kind,
    LastSelectedAt,
}
