use super::*;

/// Expect local rows aligned with Wise Old Man: missing deleted, changed overwritten, errors
/// counted without aborting the pass
#[tokio::test]
async fn aligns_local_competitions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_competition_tables().build().await?;
    let starts_at = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    let ends_at = Utc.with_ymd_and_hms(2026, 3, 8, 23, 59, 0).unwrap();

    // 1: deleted upstream, 2: renamed and extended upstream, 3: upstream failing, 4: unchanged
    test.competition()
        .insert_competition(1, Track::Sotw, "mining", starts_at, ends_at)
        .await?;
    test.competition().insert_votes(1, "fishing", 1, 3).await?;
    test.competition()
        .insert_competition(2, Track::Botw, "zulrah", starts_at, ends_at)
        .await?;
    test.competition()
        .insert_competition(3, Track::Sotw, "attack", starts_at, ends_at)
        .await?;
    test.competition()
        .insert_competition(4, Track::Botw, "vorkath", starts_at, ends_at)
        .await?;

    let _missing_mock = test.wom().create_competition_not_found_endpoint(1, 1);
    let renamed = wom_body::mock_competition_details(
        2,
        "ZULRAH BOTW (EXTENDED)",
        "zulrah",
        starts_at,
        ends_at + Duration::days(1),
        &[],
    );
    let _renamed_mock = test.wom().create_competition_details_endpoint(2, renamed, 1);
    let _failing_mock = test.wom().create_competition_error_endpoint(3, 502, 1);
    let unchanged = wom_body::mock_competition_details(
        4,
        &mock_title(Track::Botw, "vorkath"),
        "vorkath",
        starts_at,
        ends_at,
        &[],
    );
    let _unchanged_mock = test
        .wom()
        .create_competition_details_endpoint(4, unchanged, 1);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let summary = CompetitionReconciler::new(&state).reconcile_all().await;

    assert!(summary.is_ok(), "Error: {:?}", summary);
    assert_eq!(
        summary.unwrap(),
        ReconcileSummary {
            checked: 4,
            updated: 1,
            deleted: 1,
            failed: 1
        }
    );

    let competition_repo = CompetitionRepository::new(&test.db);
    assert!(competition_repo.find_by_id(1).await?.is_none());
    assert!(VoteRepository::new(&test.db)
        .get_by_competition(1)
        .await?
        .is_empty());

    let renamed = competition_repo.find_by_id(2).await?.unwrap();
    assert_eq!(renamed.title, "ZULRAH BOTW (EXTENDED)");
    assert_eq!(renamed.ends_at, (ends_at + Duration::days(1)).naive_utc());

    let failing = competition_repo.find_by_id(3).await?.unwrap();
    assert_eq!(failing.title, mock_title(Track::Sotw, "attack"));

    Ok(())
}

/// Expect the recorded winner removed together with a competition deleted upstream
#[tokio::test]
async fn deletes_winner_of_missing_competition() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_competition_tables().build().await?;
    test.competition()
        .insert_ended_competition(1, Track::Botw, "zulrah", 3)
        .await?;
    WinnerRepository::new(&test.db)
        .upsert(1, "Woox".to_string(), 57, Utc::now())
        .await?;
    let _missing_mock = test.wom().create_competition_not_found_endpoint(1, 1);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let summary = CompetitionReconciler::new(&state)
        .reconcile_all()
        .await
        .unwrap();

    assert_eq!(summary.deleted, 1);
    assert!(WinnerRepository::new(&test.db)
        .find_by_competition(1)
        .await?
        .is_none());

    Ok(())
}
