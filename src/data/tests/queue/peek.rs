//! Tests for QueueRepository::peek and remove.

use super::*;

/// Tests FIFO order per track.
///
/// Expected: the oldest entry of the requested track, other track ignored
#[tokio::test]
async fn returns_oldest_entry_of_track() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::CompetitionQueue)?;
    let now = Utc::now();
    test.competition()
        .insert_queue_entry(Track::Sotw, "mining", now - Duration::hours(1))
        .await?;
    test.competition()
        .insert_queue_entry(Track::Sotw, "fishing", now - Duration::hours(3))
        .await?;
    test.competition()
        .insert_queue_entry(Track::Botw, "zulrah", now - Duration::hours(5))
        .await?;

    let repo = QueueRepository::new(&test.db);
    let next = repo.peek(Track::Sotw).await?;

    assert_eq!(next.map(|e| e.metric), Some("fishing".to_string()));

    Ok(())
}

/// Tests consuming an entry.
///
/// Expected: the next oldest entry becomes the head
#[tokio::test]
async fn remove_advances_queue() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::CompetitionQueue)?;
    let now = Utc::now();
    test.competition()
        .insert_queue_entry(Track::Sotw, "fishing", now - Duration::hours(3))
        .await?;
    test.competition()
        .insert_queue_entry(Track::Sotw, "mining", now - Duration::hours(1))
        .await?;

    let repo = QueueRepository::new(&test.db);
    let removed = repo.remove("fishing").await?;
    let next = repo.peek(Track::Sotw).await?;

    assert_eq!(removed, 1);
    assert_eq!(next.map(|e| e.metric), Some("mining".to_string()));

    Ok(())
}

/// Tests an empty queue.
///
/// Expected: Ok(None)
#[tokio::test]
async fn empty_queue() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CompetitionQueue)?;

    let repo = QueueRepository::new(&test.db);

    assert!(repo.peek(Track::Botw).await?.is_none());

    Ok(())
}
