//! Tests for CompetitionRepository::find_current and earliest_current_end.

use super::*;

/// Tests that scheduled and active competitions both count as current.
///
/// Expected: Ok with both competitions of the track, soonest ending first
#[tokio::test]
async fn returns_scheduled_and_active() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    test.competition()
        .insert_scheduled_competition(2, Track::Sotw, "mining")
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    test.competition()
        .insert_ended_competition(3, Track::Sotw, "slayer", 1)
        .await?;
    test.competition()
        .insert_active_competition(4, Track::Botw, "zulrah")
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    let current = repo.find_current(Track::Sotw, Utc::now()).await?;

    let ids: Vec<i64> = current.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests that a competition ending exactly now is no longer current.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn excludes_competition_ending_now() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    let now = Utc::now();
    test.competition()
        .insert_competition(1, Track::Sotw, "attack", now - Duration::days(7), now)
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    let current = repo.find_current(Track::Sotw, now).await?;

    assert!(current.is_empty());

    Ok(())
}

/// Tests the earliest end across both tracks.
///
/// Expected: Ok with the ends_at of the sooner competition
#[tokio::test]
async fn finds_earliest_end_across_tracks() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    let active = test
        .competition()
        .insert_active_competition(1, Track::Botw, "zulrah")
        .await?;
    test.competition()
        .insert_scheduled_competition(2, Track::Sotw, "attack")
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    let earliest = repo.earliest_current_end(Utc::now()).await?;

    assert_eq!(earliest, Some(active.ends_at.and_utc()));

    Ok(())
}

/// Tests that no current competitions yields no wake time.
///
/// Expected: Ok(None)
#[tokio::test]
async fn no_earliest_end_without_current() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Competition)?;
    test.competition()
        .insert_ended_competition(1, Track::Sotw, "attack", 2)
        .await?;

    let repo = CompetitionRepository::new(&test.db);
    let earliest = repo.earliest_current_end(Utc::now()).await?;

    assert!(earliest.is_none());

    Ok(())
}
