use entity::sea_orm_active_enums::Track;
use varietyz::{data::competition::CompetitionRepository, service::vote::VoteService};

use super::*;

/// Expect a vote to edit the existing announcement in place
#[tokio::test]
async fn vote_edits_announcement() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack", "mining"])
        .build()
        .await?;
    let competition = test
        .competition()
        .insert_active_competition(1, Track::Sotw, "attack")
        .await?;
    CompetitionRepository::new(&test.db)
        .set_announcement_message(competition.id, Some("700".to_string()))
        .await?;
    let mocks = vec![
        test.discord()
            .create_fetch_message_endpoint(TEST_SOTW_CHANNEL_ID, "700", 1),
        test.discord()
            .create_edit_message_endpoint(TEST_SOTW_CHANNEL_ID, "700", 1),
    ];
    test.mocks.extend(mocks);

    let state = http_state(&test);
    let vote = VoteService::new(&state)
        .cast_vote(Track::Sotw, 42, "mining")
        .await
        .unwrap();

    assert_eq!(vote.competition_id, 1);
    assert_eq!(vote.choice, "mining");
    test.assert_mocks();

    Ok(())
}

/// Expect a vote on a competition that has not started to be rejected
#[tokio::test]
async fn vote_without_active_competition() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack"])
        .build()
        .await?;
    test.competition()
        .insert_scheduled_competition(1, Track::Sotw, "attack")
        .await?;
    let state = http_state(&test);

    let result = VoteService::new(&state)
        .cast_vote(Track::Sotw, 42, "attack")
        .await;

    assert!(result.unwrap_err().is_not_found());

    Ok(())
}
