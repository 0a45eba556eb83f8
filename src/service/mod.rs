//! Service layer for competition business logic.
//!
//! Services coordinate repositories with the Wise Old Man and Discord clients. The catalog,
//! rotation selector and vote tally only touch the database; the factory, embed reconciler,
//! leaderboard sync and competition reconciler also talk to the external services held in
//! [`AppState`](crate::model::app::AppState).

pub mod announcement;
pub mod catalog;
pub mod factory;
pub mod hall_of_fame;
pub mod leaderboard;
pub mod queue;
pub mod reconcile;
pub mod render;
pub mod rotation;
pub mod vote;
