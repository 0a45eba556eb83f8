//! Engine models and type definitions.
//!
//! Application state shared by services and scheduled jobs, the built-in metric catalog, and the
//! request/response shapes exchanged with Wise Old Man and Discord.

pub mod app;
pub mod catalog;
pub mod discord;
pub mod hall_of_fame;
pub mod wom;
