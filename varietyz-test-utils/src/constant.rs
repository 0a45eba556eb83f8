pub const TEST_SOTW_CHANNEL_ID: &str = "1000";
pub const TEST_BOTW_CHANNEL_ID: &str = "2000";
pub const TEST_HALL_OF_FAME_CHANNEL_ID: &str = "3000";
pub const TEST_WOM_GROUP_ID: i64 = 1234;
pub const TEST_WOM_GROUP_SECRET: &str = "test-group-secret";
pub const TEST_VERIFICATION_SECRET: &str = "111-222-333";
