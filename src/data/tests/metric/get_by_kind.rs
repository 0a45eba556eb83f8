//! Tests for MetricRepository::get_by_kind.

use super::*;

/// Tests filtering the catalog by kind in name order.
///
/// Expected: only bosses, alphabetically
#[tokio::test]
async fn returns_kind_in_name_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Metric)
        .with_skills(&["attack"])
        .with_bosses(&["zulrah", "vorkath", "abyssal_sire"])
        .build()
        .await?;

    let repo = MetricRepository::new(&test.db);
    let bosses = repo.get_by_kind(MetricKind::Boss).await?;

    let names: Vec<&str> = bosses.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["abyssal_sire", "vorkath", "zulrah"]);

    Ok(())
}
