use super::*;

/// Expect a BOTW competition registered, stored with its chunk index and announced
#[tokio::test]
async fn creates_boss_competition() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_competition_tables().build().await?;
    test.catalog().insert_numbered_bosses(40).await?;
    let window = default_window(Utc::now()).unwrap();
    let body = wom_body::mock_created_competition(
        500,
        "BOSS 03 BOTW",
        "boss_03",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let create_mock = test.wom().create_competition_endpoint("boss_03", body, 1);
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));

    let result = CompetitionFactory::new(&state)
        .create(Track::Botw, "boss_03", window)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let competition = result.unwrap();
    create_mock.assert();
    assert_eq!(competition.id, 500);
    assert_eq!(competition.title, "BOSS 03 BOTW");
    assert_eq!(competition.verification_secret, TEST_VERIFICATION_SECRET);
    assert_eq!(competition.rotation_index, 0);
    assert_eq!(competition.starts_at, window.starts_at.naive_utc());
    assert!(competition.announcement_message_id.is_some());

    let (channel_id, content) = messenger.posts().remove(0);
    assert_eq!(channel_id, TEST_BOTW_CHANNEL_ID);
    assert_eq!(content.components[0].components[0].options.len(), 25);

    let index = ConfigValueRepository::new(&test.db)
        .get(BOSS_ROTATION_INDEX)
        .await?;
    assert_eq!(index.as_deref(), Some("1"));
    let metric = MetricRepository::new(&test.db)
        .find_by_name("boss_03")
        .await?
        .unwrap();
    assert!(metric.last_selected_at.is_some());

    Ok(())
}

/// Expect SOTW competitions to record rotation index 0 without touching the boss rotation
#[tokio::test]
async fn creates_skill_competition() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["mining", "fishing"])
        .with_config_value(BOSS_ROTATION_INDEX, "4")
        .build()
        .await?;
    let window = default_window(Utc::now()).unwrap();
    let body = wom_body::mock_created_competition(
        501,
        "MINING SOTW",
        "mining",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let _create_mock = test.wom().create_competition_endpoint("mining", body, 1);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let competition = CompetitionFactory::new(&state)
        .create(Track::Sotw, "mining", window)
        .await
        .unwrap();

    assert_eq!(competition.rotation_index, 0);
    assert_eq!(competition.title, "MINING SOTW");
    let index = ConfigValueRepository::new(&test.db)
        .get(BOSS_ROTATION_INDEX)
        .await?;
    assert_eq!(index.as_deref(), Some("4"));

    Ok(())
}

/// Expect an invalid metric rejected before Wise Old Man is contacted
#[tokio::test]
async fn rejects_unknown_metric() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["mining"])
        .build()
        .await?;
    let window = default_window(Utc::now()).unwrap();
    let create_mock = test.wom().create_competition_failure_endpoint(500, 0);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let result = CompetitionFactory::new(&state)
        .create(Track::Botw, "mining", window)
        .await;

    assert!(matches!(
        result,
        Err(Error::CompetitionError(CompetitionError::UnknownMetric { .. }))
    ));
    create_mock.assert();

    Ok(())
}

/// Expect nothing stored and the boss rotation untouched when Wise Old Man fails
#[tokio::test]
async fn tracking_failure_stores_nothing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_bosses(&["zulrah"])
        .build()
        .await?;
    let window = default_window(Utc::now()).unwrap();
    let _create_mock = test.wom().create_competition_failure_endpoint(503, 1);
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));

    let result = CompetitionFactory::new(&state)
        .create(Track::Botw, "zulrah", window)
        .await;

    assert!(result.as_ref().is_err_and(|e| e.is_transient()), "{:?}", result);
    assert!(CompetitionRepository::new(&test.db).get_all().await?.is_empty());
    assert!(ConfigValueRepository::new(&test.db)
        .get(BOSS_ROTATION_INDEX)
        .await?
        .is_none());
    assert_eq!(messenger.post_count(), 0);

    Ok(())
}

/// Expect a corrupt boss rotation index to fail before anything is created on Wise Old Man
#[tokio::test]
async fn invalid_rotation_index_skips_tracking() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_bosses(&["zulrah"])
        .with_config_value(BOSS_ROTATION_INDEX, "not-a-number")
        .build()
        .await?;
    let window = default_window(Utc::now()).unwrap();
    let body = wom_body::mock_created_competition(
        502,
        "ZULRAH BOTW",
        "zulrah",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let create_mock = test.wom().create_competition_endpoint("zulrah", body, 0);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));
    let factory = CompetitionFactory::new(&state);

    for _ in 0..2 {
        let result = factory.create(Track::Botw, "zulrah", window).await;
        assert!(matches!(result, Err(Error::ParseError(_))), "{:?}", result);
    }

    create_mock.assert();
    assert!(CompetitionRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect a failed local insert to roll back the boss rotation advance
#[tokio::test]
async fn failed_store_keeps_rotation_index() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_bosses(&["zulrah", "vorkath"])
        .with_config_value(BOSS_ROTATION_INDEX, "7")
        .build()
        .await?;
    // Wise Old Man hands back an id that is already stored locally
    test.competition()
        .insert_ended_competition(503, Track::Botw, "vorkath", 3)
        .await?;
    let window = default_window(Utc::now()).unwrap();
    let body = wom_body::mock_created_competition(
        503,
        "ZULRAH BOTW",
        "zulrah",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let _create_mock = test.wom().create_competition_endpoint("zulrah", body, 1);
    let state = state_with_messenger(&test, Arc::new(RecordingMessenger::new()));

    let result = CompetitionFactory::new(&state)
        .create(Track::Botw, "zulrah", window)
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))), "{:?}", result);
    let index = ConfigValueRepository::new(&test.db)
        .get(BOSS_ROTATION_INDEX)
        .await?;
    assert_eq!(index.as_deref(), Some("7"));
    let metric = MetricRepository::new(&test.db)
        .find_by_name("zulrah")
        .await?
        .unwrap();
    assert!(metric.last_selected_at.is_none());

    Ok(())
}
