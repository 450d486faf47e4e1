//! Civil calendar and time-of-day conversions, epoch-aware for PostgreSQL.
//!
//! PostgreSQL's `date`/`time`/`timestamp` wire formats all count from the
//! PostgreSQL epoch, 2000-01-01. This module isolates the Julian-day
//! arithmetic (via the `time` crate) so [`crate::encode`] and
//! [`crate::decode`] only ever deal in PostgreSQL day/microsecond counts.

use time::Month;

use crate::error::{Error, Result};

/// Julian day number of 2000-01-01, the PostgreSQL epoch.
const PG_EPOCH_JULIAN_DAY: i32 = 2_451_545;

/// Days from the proleptic-Gregorian epoch (0000-12-31, day 0) to 2000-01-01.
pub const POSTGRES_GD_EPOCH: i32 = 730_485;

/// Seconds from the Unix epoch (1970-01-01) to the PostgreSQL epoch (2000-01-01).
pub const UNIX_TO_PG_SECONDS: i64 = 946_684_800;

/// Seconds from 0000-12-31 to the PostgreSQL epoch, in the Gregorian-second domain.
pub const POSTGRES_GS_EPOCH: i64 = 63_113_904_000;

/// Seconds from 0000-12-31 to the Unix epoch, in the Gregorian-second domain.
pub const GS_TO_UNIX_EPOCH: i64 = 62_167_219_200;

/// Converts a civil `(year, month, day)` to a Gregorian day count where `0`
/// denotes 0000-12-31 (so `POSTGRES_GD_EPOCH` denotes 2000-01-01).
pub fn date_to_gregorian_days(year: i32, month: u8, day: u8) -> Result<i32> {
    let month = Month::try_from(month).map_err(|_| Error::Semantic("Invalid month".to_owned()))?;
    let date = time::Date::from_calendar_date(year, month, day)
        .map_err(|e| Error::Semantic(format!("invalid date: {e}")))?;
    Ok(date.to_julian_day() - PG_EPOCH_JULIAN_DAY + POSTGRES_GD_EPOCH)
}

/// Inverse of [`date_to_gregorian_days`].
pub fn gregorian_days_to_date(days: i32) -> Result<(i32, u8, u8)> {
    let julian_day = days - POSTGRES_GD_EPOCH + PG_EPOCH_JULIAN_DAY;
    let date = time::Date::from_julian_day(julian_day)
        .map_err(|e| Error::Semantic(format!("invalid date: {e}")))?;
    Ok((date.year(), date.month() as u8, date.day()))
}

/// Decomposes a count of seconds within a day (`0 <= seconds < 86_400`) into
/// `(hours, minutes, seconds)`.
pub fn seconds_to_time(seconds: i64) -> (u8, u8, u8) {
    let hours = (seconds / 3600) as u8;
    let remainder = seconds % 3600;
    let minutes = (remainder / 60) as u8;
    let secs = (remainder % 60) as u8;
    (hours, minutes, secs)
}
