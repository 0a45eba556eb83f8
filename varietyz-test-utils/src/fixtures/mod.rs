//! Test fixture modules for database rows and HTTP mock endpoints.
//!
//! - `catalog` - metric catalog rows
//! - `competition` - competitions, votes, queue entries and config values
//! - `discord` - Discord channel message endpoints
//! - `wom` - Wise Old Man competition endpoints and response bodies

pub mod catalog;
pub mod competition;
pub mod discord;
pub mod wom;
