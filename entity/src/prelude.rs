pub use super::competition::Entity as Competition;
pub use super::competition_queue::Entity as CompetitionQueue;
pub use super::competition_vote::Entity as CompetitionVote;
pub use super::competition_winner::Entity as CompetitionWinner;
pub use super::config_value::Entity as ConfigValue;
pub use super::metric::Entity as Metric;
