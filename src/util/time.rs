//! Competition window calculations.
//!
//! Competitions run for seven calendar days starting at midnight UTC. These helpers compute the
//! window for a competition created at a given instant and convert between the naive UTC
//! timestamps stored in the database and timezone-aware values used everywhere else.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::error::Error;

/// Number of calendar days covered by one competition.
pub const COMPETITION_DAYS: i64 = 7;

/// Start and end of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionWindow {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Calculates the default window for a competition created at `now`.
///
/// # Logic
/// - Exactly 00:00:00 UTC starts the competition immediately
/// - Any other instant snaps forward to the next 00:00 UTC
/// - The competition ends at 23:59 UTC on its 7th calendar day (start + 6 days + 23h59m)
///
/// # Arguments
/// - `now` - Current UTC timestamp
///
/// # Returns
/// - `Ok(CompetitionWindow)` - The computed window
/// - `Err(Error::ParseError)` - Date arithmetic overflowed the representable range
///
/// # Example
/// ```ignore
/// // 2026-03-04 13:45 UTC starts 2026-03-05 00:00 and ends 2026-03-11 23:59
/// let now = Utc.with_ymd_and_hms(2026, 3, 4, 13, 45, 0).unwrap();
/// let window = default_window(now)?;
/// ```
pub fn default_window(now: DateTime<Utc>) -> Result<CompetitionWindow, Error> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    let starts_at = if now == midnight {
        midnight
    } else {
        midnight
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| {
                Error::ParseError("Failed to calculate next midnight for competition start".into())
            })?
    };

    let length = Duration::days(COMPETITION_DAYS - 1) + Duration::hours(23) + Duration::minutes(59);
    let ends_at = starts_at.checked_add_signed(length).ok_or_else(|| {
        Error::ParseError("Failed to calculate competition end timestamp".to_string())
    })?;

    Ok(CompetitionWindow { starts_at, ends_at })
}
