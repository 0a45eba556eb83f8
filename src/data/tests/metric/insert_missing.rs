//! Tests for MetricRepository::insert_missing.

use super::*;

/// Tests seeding an empty catalog.
///
/// Expected: Ok with every entry inserted
#[tokio::test]
async fn inserts_into_empty_catalog() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Metric)?;

    let repo = MetricRepository::new(&test.db);
    let inserted = repo
        .insert_missing(vec![
            ("attack".to_string(), MetricKind::Skill),
            ("zulrah".to_string(), MetricKind::Boss),
        ])
        .await?;

    assert_eq!(inserted, 2);

    Ok(())
}

/// Tests that existing entries keep their selection history.
///
/// Expected: only the new entry inserted, last_selected_at of the existing one preserved
#[tokio::test]
async fn leaves_existing_entries_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Metric)
        .with_skills(&["attack"])
        .build()
        .await?;
    let selected_at = Utc::now();

    let repo = MetricRepository::new(&test.db);
    repo.update_last_selected("attack", selected_at).await?;
    let inserted = repo
        .insert_missing(vec![
            ("attack".to_string(), MetricKind::Skill),
            ("strength".to_string(), MetricKind::Skill),
        ])
        .await?;

    assert_eq!(inserted, 1);
    let attack = repo.find_by_name("attack").await?.expect("attack missing");
    assert!(attack.last_selected_at.is_some());

    Ok(())
}

/// Tests that re-seeding an up to date catalog is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn nothing_to_insert() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Metric)
        .with_skills(&["attack"])
        .build()
        .await?;

    let repo = MetricRepository::new(&test.db);
    let inserted = repo
        .insert_missing(vec![("attack".to_string(), MetricKind::Skill)])
        .await?;

    assert_eq!(inserted, 0);

    Ok(())
}
