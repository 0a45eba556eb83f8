use super::*;

/// Expect winners aggregated per track, overall and by single gain
#[tokio::test]
async fn aggregates_recorded_winners() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_competition_tables().build().await?;
    insert_winners(&mut test).await?;
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let standings = AllTimeLeaderboard::new(&state).standings().await.unwrap();

    let sotw: Vec<(&str, u32, i64)> = standings
        .sotw
        .iter()
        .map(|t| (t.player_name.as_str(), t.wins, t.total_gain))
        .collect();
    assert_eq!(sotw, vec![("Zezima", 1, 1_500_000)]);
    let botw: Vec<(&str, u32, i64)> = standings
        .botw
        .iter()
        .map(|t| (t.player_name.as_str(), t.wins, t.total_gain))
        .collect();
    assert_eq!(botw, vec![("Woox", 1, 300), ("Zezima", 1, 120)]);

    let overall = standings.overall.unwrap();
    assert_eq!(overall.player_name, "Zezima");
    assert_eq!(overall.wins, 2);
    assert_eq!(overall.total_gain, 1_500_120);
    assert_eq!(standings.highest_single.unwrap().competition_id, 1);

    Ok(())
}

/// Expect empty standings without any winners
#[tokio::test]
async fn empty_without_winners() -> Result<(), TestError> {
    let test = TestBuilder::new().with_competition_tables().build().await?;
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let standings = AllTimeLeaderboard::new(&state).standings().await.unwrap();

    assert!(standings.sotw.is_empty());
    assert!(standings.botw.is_empty());
    assert!(standings.overall.is_none());
    assert!(standings.highest_single.is_none());

    Ok(())
}
