//! Statistics aggregator - day/month/year rollups over timesheet entries
//!
//! Both entry points are pure folds over an already-materialized entry
//! collection. Daily statistics split entries across the days they touch;
//! monthly statistics deliberately do not split across month boundaries
//! and group by the begin timestamp only. The asymmetry reproduces the
//! upstream system's behavior and is flagged for product review rather
//! than silently changed.

use std::collections::BTreeMap;

use chrono::Datelike;
use chrono_tz::Tz;
use tally_domain::{Day, Result, TallyError, TimeWindow, Timesheet, Year};
use uuid::Uuid;

use super::splitter::split_entry;

/// Daily rollup of the entries touching a window.
///
/// # Algorithm
/// 1. Pre-fill one zeroed bucket per UTC calendar date in the window
///    (gap-filling: days with no activity still appear).
/// 2. Fold every closed entry that overlaps the window (and matches the
///    optional user filter) through the duration splitter, accumulating
///    each fragment into its day bucket. Fragments dated outside the
///    pre-filled range still get buckets; an entry only needs to overlap
///    the window, its fragments stay within its own span.
/// 3. Return the buckets ascending by date.
///
/// Running entries contribute nothing and are skipped.
pub fn aggregate_daily(
    entries: &[Timesheet],
    window: &TimeWindow,
    user: Option<Uuid>,
) -> Result<Vec<Day>> {
    let mut buckets: BTreeMap<_, Day> = BTreeMap::new();

    // Step 1: gap-fill the requested window
    let mut date = window.begin.date_naive();
    let last = window.end.date_naive();
    while date <= last {
        buckets.insert(date, Day::empty(date));
        date = date
            .succ_opt()
            .ok_or_else(|| TallyError::Internal(format!("calendar overflow after {date}")))?;
    }

    // Step 2: fold fragments of the overlapping closed entries
    for entry in filter_entries(entries, user) {
        let Some(end) = entry.end else { continue };
        if !window.overlaps(entry.begin, end) {
            continue;
        }

        for fragment in split_entry(entry)? {
            buckets
                .entry(fragment.date)
                .or_insert_with(|| Day::empty(fragment.date))
                .add_fragment(&fragment);
        }
    }

    // Step 3: BTreeMap iteration is already ascending by date
    Ok(buckets.into_values().collect())
}

/// Monthly/yearly rollup of the entries beginning inside a window.
///
/// # Algorithm
/// 1. Pre-fill a year with twelve zeroed months for every calendar year
///    the window touches.
/// 2. Group closed entries by the year and month of their **begin**
///    timestamp, evaluated in the entry's own timezone. An entry spanning
///    a month boundary is not split; its whole duration and amount land in
///    the month it began in.
/// 3. Return years descending; months are always ascending within a year.
pub fn aggregate_monthly(
    entries: &[Timesheet],
    window: &TimeWindow,
    user: Option<Uuid>,
) -> Result<Vec<Year>> {
    let mut years: BTreeMap<i32, Year> = BTreeMap::new();

    for year in window.begin.year()..=window.end.year() {
        years.insert(year, Year::new(year));
    }

    for entry in filter_entries(entries, user) {
        if entry.end.is_none() || !window.contains(entry.begin) {
            continue;
        }

        let tz: Tz = entry
            .timezone
            .parse()
            .map_err(|_| TallyError::UnknownTimezone(entry.timezone.clone()))?;
        let begin = entry.begin.with_timezone(&tz);

        // The local calendar can shift the begin into a year outside the
        // pre-filled range; such years still get their twelve months
        let year = years.entry(begin.year()).or_insert_with(|| Year::new(begin.year()));
        let month = year.month_mut(begin.month()).ok_or_else(|| {
            TallyError::Internal(format!("month {} out of range", begin.month()))
        })?;

        month.duration_seconds += entry.duration_seconds;
        month.amount += entry.rate;
    }

    Ok(years.into_values().rev().collect())
}

fn filter_entries(entries: &[Timesheet], user: Option<Uuid>) -> impl Iterator<Item = &Timesheet> {
    entries.iter().filter(move |entry| user.map_or(true, |id| entry.user_id == id))
}
