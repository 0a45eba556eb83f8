pub mod prelude;

pub mod competition;
pub mod competition_queue;
pub mod competition_vote;
pub mod competition_winner;
pub mod config_value;
pub mod metric;
pub mod sea_orm_active_enums;
