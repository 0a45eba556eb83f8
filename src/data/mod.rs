//! Database repositories.
//!
//! Each repository wraps one table and is generic over [`sea_orm::ConnectionTrait`] so it can run
//! against a plain connection or inside a transaction.

pub mod competition;
pub mod config_value;
pub mod metric;
pub mod queue;
pub mod vote;
pub mod winner;

use sea_orm::{DbErr, SqlErr};


/// Whether the error is a primary key or unique index violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
