//! Tests for VoteRepository::count_by_choice and delete_by_competition.

use super::*;

/// Tests grouping votes by choice.
///
/// Expected: one entry per choice with its vote count, other competitions ignored
#[tokio::test]
async fn counts_votes_per_choice() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Competition,
        entity::prelude::CompetitionVote
    )?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    test.competition()
        .insert_active_competition(2, Track::Botw, "zulrah")
        .await?;
    test.competition().insert_votes(1, "mining", 1, 3).await?;
    test.competition().insert_votes(1, "fishing", 10, 1).await?;
    test.competition().insert_votes(2, "vorkath", 20, 5).await?;

    let repo = VoteRepository::new(&test.db);
    let mut counts = repo.count_by_choice(1).await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("fishing".to_string(), 1), ("mining".to_string(), 3)]
    );

    Ok(())
}

/// Tests deleting every vote of a competition.
///
/// Expected: all votes of that competition removed
#[tokio::test]
async fn deletes_votes_of_competition() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Competition,
        entity::prelude::CompetitionVote
    )?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    test.competition().insert_votes(1, "mining", 1, 4).await?;

    let repo = VoteRepository::new(&test.db);
    let deleted = repo.delete_by_competition(1).await?;

    assert_eq!(deleted, 4);
    assert!(repo.count_by_choice(1).await?.is_empty());

    Ok(())
}
