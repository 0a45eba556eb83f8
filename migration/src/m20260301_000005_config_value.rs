use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfigValue::Table)
                    .if_not_exists()
                    .col(string(ConfigValue::Key).primary_key())
                    .col(string(ConfigValue::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfigValue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConfigValue {
    Table,
    Key,
    Value,
}
