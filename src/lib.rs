//! Skill and boss of the week competition engine for the Varietyz clan.
//!
//! Rotates the metric competed on for both weekly tracks, tallies member votes for the next
//! metric, and keeps Discord announcements and leaderboards in sync with Wise Old Man.

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
