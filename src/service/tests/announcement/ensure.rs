use super::*;

/// Expect the first call to post and store the message id, and a repeat call to do nothing
#[tokio::test]
async fn posts_once_then_unchanged() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack", "mining"])
        .build()
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));
    let reconciler = EmbedReconciler::new(&state);

    let first = reconciler.ensure(Track::Sotw, false).await.unwrap();
    let second = reconciler.ensure(Track::Sotw, false).await.unwrap();

    let message_id = match first {
        EnsureOutcome::Posted { message_id } => message_id,
        other => panic!("expected a post, got {:?}", other),
    };
    assert_eq!(second, EnsureOutcome::Unchanged);
    assert_eq!(messenger.post_count(), 1);
    assert_eq!(messenger.edit_count(), 0);
    let stored = CompetitionRepository::new(&test.db).find_by_id(1).await?.unwrap();
    assert_eq!(stored.announcement_message_id, Some(message_id));

    Ok(())
}

/// Expect at most one edit when an existing announcement is reconciled twice without changes
#[tokio::test]
async fn edits_existing_message_at_most_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack", "mining"])
        .build()
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    let messenger = RecordingMessenger::new();
    let message_id = attach_announcement(&test, &messenger, 1, TEST_SOTW_CHANNEL_ID).await?;
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));
    let reconciler = EmbedReconciler::new(&state);

    let first = reconciler.ensure(Track::Sotw, false).await.unwrap();
    let second = reconciler.ensure(Track::Sotw, false).await.unwrap();

    assert_eq!(first, EnsureOutcome::Edited { message_id });
    assert_eq!(second, EnsureOutcome::Unchanged);
    assert_eq!(messenger.edit_count(), 1);

    Ok(())
}

/// Expect an edit after a new vote changes the rendered counts
#[tokio::test]
async fn edits_after_vote() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack", "mining"])
        .build()
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));
    let reconciler = EmbedReconciler::new(&state);

    reconciler.ensure(Track::Sotw, false).await.unwrap();
    test.competition().insert_vote(10, 1, "mining").await?;
    let outcome = reconciler.ensure(Track::Sotw, false).await.unwrap();

    assert!(matches!(outcome, EnsureOutcome::Edited { .. }));
    assert_eq!(messenger.edit_count(), 1);

    Ok(())
}

/// Expect a forced refresh to edit even when nothing changed
#[tokio::test]
async fn force_refresh_always_edits() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack"])
        .build()
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));
    let reconciler = EmbedReconciler::new(&state);

    reconciler.ensure(Track::Sotw, false).await.unwrap();
    let outcome = reconciler.ensure(Track::Sotw, true).await.unwrap();

    assert!(matches!(outcome, EnsureOutcome::Edited { .. }));

    Ok(())
}

/// Expect a deleted announcement to be replaced and the new id stored
#[tokio::test]
async fn reposts_deleted_message() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_bosses(&["zulrah", "vorkath"])
        .build()
        .await?;
    test.competition()
        .insert_active_competition(1, Track::Botw, "zulrah")
        .await?;
    let messenger = RecordingMessenger::new();
    let old_id = attach_announcement(&test, &messenger, 1, TEST_BOTW_CHANNEL_ID).await?;
    messenger.delete_message(TEST_BOTW_CHANNEL_ID, &old_id);
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));

    let outcome = EmbedReconciler::new(&state)
        .ensure(Track::Botw, false)
        .await
        .unwrap();

    let message_id = match outcome {
        EnsureOutcome::Posted { message_id } => message_id,
        other => panic!("expected a post, got {:?}", other),
    };
    assert_ne!(message_id, old_id);
    assert!(messenger.message(TEST_BOTW_CHANNEL_ID, &message_id).is_some());
    let stored = CompetitionRepository::new(&test.db).find_by_id(1).await?.unwrap();
    assert_eq!(stored.announcement_message_id, Some(message_id));

    Ok(())
}

/// Expect the scheduled competition to be announced when none is active
#[tokio::test]
async fn falls_back_to_scheduled_competition() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack"])
        .build()
        .await?;
    test.competition()
        .insert_scheduled_competition(7, Track::Sotw, "attack")
        .await?;
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));

    let outcome = EmbedReconciler::new(&state)
        .ensure(Track::Sotw, false)
        .await
        .unwrap();

    assert!(matches!(outcome, EnsureOutcome::Posted { .. }));
    let (_, content) = messenger.posts().remove(0);
    assert_eq!(content.embeds[0].title, mock_title(Track::Sotw, "attack"));

    Ok(())
}

/// Expect nothing posted when the track has no competition
#[tokio::test]
async fn no_competition_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_competition_tables().build().await?;
    let messenger = RecordingMessenger::new();
    let state = state_with_messenger(&test, Arc::new(messenger.clone()));

    let outcome = EmbedReconciler::new(&state)
        .ensure(Track::Botw, false)
        .await
        .unwrap();

    assert_eq!(outcome, EnsureOutcome::NoCompetition);
    assert_eq!(messenger.post_count(), 0);

    Ok(())
}
