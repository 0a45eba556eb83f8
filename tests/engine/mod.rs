//! End-to-end flows over HTTP, with Wise Old Man and Discord served by the mock server.

use dioxus_logger::tracing::Level;
use varietyz::{config::Config, model::app::AppState, startup::build_app_state};
use varietyz_test_utils::prelude::*;

mod rotation;
mod vote;

/// Application state wired exactly as in production, pointed at the mock server.
fn http_state(test: &TestSetup) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        discord_bot_token: "integration-bot-token".to_string(),
        sotw_channel_id: TEST_SOTW_CHANNEL_ID.to_string(),
        botw_channel_id: TEST_BOTW_CHANNEL_ID.to_string(),
        hall_of_fame_channel_id: TEST_HALL_OF_FAME_CHANNEL_ID.to_string(),
        wom_group_id: TEST_WOM_GROUP_ID,
        wom_group_secret: TEST_WOM_GROUP_SECRET.to_string(),
        wom_api_url: test.server_url(),
        discord_api_url: test.server_url(),
        user_agent: "varietyz-tests".to_string(),
        http_timeout_secs: 5,
        log_level: Level::DEBUG,
    };

    build_app_state(&config, test.db.clone()).unwrap()
}
