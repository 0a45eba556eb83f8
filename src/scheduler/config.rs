pub mod leaderboard {
    /// Cron expression for leaderboard refreshes
    /// Runs every 10 minutes (00:00, 00:10, 00:20, etc.)
    pub const CRON_EXPRESSION: &str = "0 */10 * * * *";
}

pub mod announcement {
    /// Cron expression for announcement reconciliation
    /// Runs every 10 minutes offset by 5 from the leaderboard refresh (00:05, 00:15, etc.)
    pub const CRON_EXPRESSION: &str = "0 5-59/10 * * * *";
}

pub mod reconcile {
    /// Cron expression for Wise Old Man reconciliation
    /// Runs every hour at minute 30
    pub const CRON_EXPRESSION: &str = "0 30 * * * *";
}

pub mod rotation {
    use chrono::Duration;

    /// Cron expression for the rotation safety pass
    /// Runs every hour at the top of the hour, retrying tracks whose creation failed
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";

    /// Delay after a competition's end before the rotation wakes up
    pub const WAKE_GRACE: Duration = Duration::seconds(1);
}
