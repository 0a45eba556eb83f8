use entity::sea_orm_active_enums::MetricKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{TestError, TestSetup};

impl TestSetup {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert catalog entries of one kind with no selection history.
    pub async fn insert_metrics(
        &mut self,
        kind: MetricKind,
        names: &[&str],
    ) -> Result<(), TestError> {
        if names.is_empty() {
            return Ok(());
        }

        let models = names.iter().map(|name| entity::metric::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set(kind),
            last_selected_at: ActiveValue::Set(None),
        });

        entity::prelude::Metric::insert_many(models)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }

    /// Insert `count` bosses named `boss_00`, `boss_01`, ... so name order equals index order.
    pub async fn insert_numbered_bosses(&mut self, count: usize) -> Result<Vec<String>, TestError> {
        let names: Vec<String> = (0..count).map(|i| format!("boss_{:02}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        self.insert_metrics(MetricKind::Boss, &refs).await?;

        Ok(names)
    }
}
