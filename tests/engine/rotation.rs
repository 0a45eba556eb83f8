use std::sync::Arc;

use chrono::Utc;
use entity::sea_orm_active_enums::Track;
use tokio_cron_scheduler::JobScheduler;
use varietyz::{
    data::competition::CompetitionRepository,
    scheduler::{
        rotation::{RotationScheduler, TrackOutcome},
        timer::CronRotationTimer,
    },
    util::time::default_window,
};

use super::*;

/// Expect an empty engine to create and announce one competition per track
#[tokio::test]
async fn first_pass_creates_and_announces() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_competition_tables()
        .with_skills(&["attack"])
        .with_bosses(&["zulrah"])
        .build()
        .await?;
    let now = Utc::now();
    let window = default_window(now).unwrap();

    let sotw_body = wom_body::mock_created_competition(
        10,
        "ATTACK SOTW",
        "attack",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let botw_body = wom_body::mock_created_competition(
        20,
        "ZULRAH BOTW",
        "zulrah",
        window.starts_at,
        window.ends_at,
        TEST_VERIFICATION_SECRET,
    );
    let mocks = vec![
        test.wom().create_competition_endpoint("attack", sotw_body, 1),
        test.wom().create_competition_endpoint("zulrah", botw_body, 1),
        test.discord()
            .create_post_message_endpoint(TEST_SOTW_CHANNEL_ID, "501", 1),
        test.discord()
            .create_post_message_endpoint(TEST_BOTW_CHANNEL_ID, "502", 1),
    ];
    test.mocks.extend(mocks);

    // Not started, so the armed wake-up never fires during the test
    let sched = JobScheduler::new().await.unwrap();
    let timer = Arc::new(CronRotationTimer::new(sched));
    let scheduler = Arc::new(RotationScheduler::new(http_state(&test), timer));

    let report = scheduler.run_at(now).await.expect("pass skipped");

    for track in Track::ALL {
        assert!(
            matches!(report.outcome(track), Some(Ok(TrackOutcome::Created { .. }))),
            "{} was not rotated",
            track.label()
        );
    }
    test.assert_mocks();

    let competition_repo = CompetitionRepository::new(&test.db);
    let sotw = competition_repo.find_by_id(10).await?.unwrap();
    let botw = competition_repo.find_by_id(20).await?.unwrap();
    assert_eq!(sotw.announcement_message_id.as_deref(), Some("501"));
    assert_eq!(botw.announcement_message_id.as_deref(), Some("502"));
    assert_eq!(report.next_wake, Some(window.ends_at + chrono::Duration::seconds(1)));

    Ok(())
}
