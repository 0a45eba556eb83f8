//! Tests for WinnerRepository::upsert.

use super::*;

/// Tests recording and replacing a competition winner.
///
/// Expected: a single row holding the latest values
#[tokio::test]
async fn records_single_winner_per_competition() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Competition,
        entity::prelude::CompetitionWinner
    )?;
    test.competition()
        .insert_ended_competition(1, Track::Botw, "zulrah", 1)
        .await?;

    let repo = WinnerRepository::new(&test.db);
    repo.upsert(1, "Zezima".to_string(), 120, Utc::now()).await?;
    repo.upsert(1, "Lynx Titan".to_string(), 150, Utc::now())
        .await?;

    let winner = repo.find_by_competition(1).await?.expect("winner missing");
    assert_eq!(winner.player_name, "Lynx Titan");
    assert_eq!(winner.metric_gain, 150);

    Ok(())
}
