//! Declarative test builder.
//!
//! Tables, catalog rows, config values and mock endpoints are queued on the builder and created
//! in a fixed order during `build()`: tables first, then rows, then mocks.

use entity::sea_orm_active_enums::MetricKind;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_competition_tables: bool,

    metrics: Vec<(MetricKind, Vec<String>)>,
    config_values: Vec<(String, String)>,

    mock_builders: Vec<MockBuilder>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_competition_tables: false,
            metrics: Vec::new(),
            config_values: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Add every table the engine uses, in dependency order.
    pub fn with_competition_tables(mut self) -> Self {
        self.include_competition_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use varietyz_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), varietyz_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Competition)
    ///     .with_table(CompetitionVote)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert skill catalog entries.
    pub fn with_skills(mut self, names: &[&str]) -> Self {
        self.metrics.push((
            MetricKind::Skill,
            names.iter().map(|n| n.to_string()).collect(),
        ));
        self
    }

    /// Insert boss catalog entries.
    pub fn with_bosses(mut self, names: &[&str]) -> Self {
        self.metrics.push((
            MetricKind::Boss,
            names.iter().map(|n| n.to_string()).collect(),
        ));
        self
    }

    pub fn with_config_value(mut self, key: &str, value: &str) -> Self {
        self.config_values.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_competition_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Competition));
            tables.push(schema.create_table_from_entity(entity::prelude::CompetitionVote));
            tables.push(schema.create_table_from_entity(entity::prelude::CompetitionWinner));
            tables.push(schema.create_table_from_entity(entity::prelude::CompetitionQueue));
            tables.push(schema.create_table_from_entity(entity::prelude::ConfigValue));
            tables.push(schema.create_table_from_entity(entity::prelude::Metric));
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        // 2. Insert rows
        for (kind, names) in self.metrics {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            setup.catalog().insert_metrics(kind, &refs).await?;
        }

        for (key, value) in self.config_values {
            setup.competition().insert_config_value(&key, &value).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
