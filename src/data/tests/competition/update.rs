//! Tests for CompetitionRepository message references, update_details and delete.

use super::*;

/// Tests persisting announcement and leaderboard message references.
///
/// Expected: both references are stored independently
#[tokio::test]
async fn stores_message_references() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    repo.set_announcement_message(1, Some("900".to_string()))
        .await?;
    repo.set_leaderboard_message(1, Some("901".to_string()))
        .await?;

    let stored = repo.find_by_id(1).await?.expect("competition missing");
    assert_eq!(stored.announcement_message_id.as_deref(), Some("900"));
    assert_eq!(stored.leaderboard_message_id.as_deref(), Some("901"));

    Ok(())
}

/// Tests overwriting remote-authoritative fields.
///
/// Expected: title, metric and window replaced, track untouched
#[tokio::test]
async fn overwrites_details() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    let starts_at = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    let ends_at = starts_at + Duration::days(3);

    let repo = CompetitionRepository::new(&test.db);
    repo.update_details(
        1,
        CompetitionDetailsUpdate {
            title: "Renamed".to_string(),
            metric: "strength".to_string(),
            starts_at,
            ends_at,
        },
    )
    .await?;

    let stored = repo.find_by_id(1).await?.expect("competition missing");
    assert_eq!(stored.title, "Renamed");
    assert_eq!(stored.metric, "strength");
    assert_eq!(stored.track, Track::Sotw);
    assert_eq!(stored.ends_at, ends_at.naive_utc());

    Ok(())
}

/// Tests deleting a competition.
///
/// Expected: one row affected, then nothing found
#[tokio::test]
async fn deletes_competition() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    let deleted = repo.delete(1).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}
