//! Duration splitter - attributes a timesheet entry to calendar days
//!
//! Entries may span midnight (or several midnights); daily statistics need
//! the portion of the duration and of the monetary amount that falls on
//! each day the entry touches. Day boundaries are computed in the entry's
//! own timezone, not the caller's.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tally_domain::{DayFragment, Result, TallyError, Timesheet};

/// Split an interval into per-calendar-day fragments.
///
/// # Algorithm
/// 1. Convert `begin`/`end` into the entry's timezone.
/// 2. Walk forward one day at a time: each fragment runs from the current
///    position to the next local midnight, or to `end` on the final day.
/// 3. Each fragment carries its wall-clock seconds plus the proportional
///    share of `total_amount` (`fragment_seconds / total_duration_seconds`;
///    a zero total duration yields zero ratio for every fragment).
///
/// Zero-length intervals produce a single zero fragment attributed to the
/// day of `begin`. The fragment seconds always sum to exactly
/// `end - begin`; amounts sum to `total_amount` up to floating-point
/// rounding when the total duration equals that span.
///
/// # Errors
/// - [`TallyError::InvalidInput`] when `end < begin`
/// - [`TallyError::UnknownTimezone`] when `timezone` is not an IANA name
pub fn split(
    begin: DateTime<Utc>,
    end: DateTime<Utc>,
    timezone: &str,
    total_duration_seconds: i64,
    total_amount: f64,
) -> Result<Vec<DayFragment>> {
    if end < begin {
        return Err(TallyError::InvalidInput(format!(
            "interval end {end} precedes begin {begin}"
        )));
    }

    let tz: Tz = timezone
        .parse()
        .map_err(|_| TallyError::UnknownTimezone(timezone.to_string()))?;

    let begin = begin.with_timezone(&tz);
    let end = end.with_timezone(&tz);

    let mut fragments = Vec::new();
    let mut cursor = begin;

    loop {
        let date = cursor.date_naive();
        let next_day = date
            .succ_opt()
            .ok_or_else(|| TallyError::Internal(format!("calendar overflow after {date}")))?;
        let day_boundary = local_midnight(&tz, next_day)?;

        // The final fragment ends exactly at `end`, not at midnight
        let segment_end = if end < day_boundary { end } else { day_boundary };
        let duration_seconds = (segment_end - cursor).num_seconds();

        let ratio = if total_duration_seconds == 0 {
            0.0
        } else {
            duration_seconds as f64 / total_duration_seconds as f64
        };

        fragments.push(DayFragment { date, duration_seconds, amount: total_amount * ratio });

        if segment_end >= end {
            break;
        }
        cursor = segment_end;
    }

    Ok(fragments)
}

/// Split a closed timesheet entry using its own duration, amount and
/// timezone.
///
/// # Errors
/// [`TallyError::RunningEntry`] when the entry has no `end` yet; running
/// entries must never reach the splitter.
pub fn split_entry(entry: &Timesheet) -> Result<Vec<DayFragment>> {
    let end = entry.end.ok_or(TallyError::RunningEntry(entry.id))?;
    split(entry.begin, end, &entry.timezone, entry.duration_seconds, entry.rate)
}

/// Local midnight of a date, resilient to DST transitions: an ambiguous
/// midnight resolves to its earliest occurrence, a skipped midnight to the
/// first valid instant of the day.
fn local_midnight(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(midnight + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| {
                TallyError::Internal(format!("no valid local time near midnight {date} in {tz}"))
            }),
    }
}
