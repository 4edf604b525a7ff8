//! Display strings for the clock: Hebrew date, weekday and part of day.

use crate::calendar::HebrewCalendar;
use crate::error::{LuachError, Result};
use crate::gematria::{encode_day_number, encode_year_number};
use crate::types::{CalendarDate, DayPart};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const WEEKDAY_NAMES: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

const DAY_PREFIX: &str = "יום ";

/// Exclusive upper hour bound for each part of the day, sorted ascending.
const DAY_PARTS: [(u32, DayPart); 6] = [
    (5, DayPart::Night),
    (12, DayPart::Morning),
    (14, DayPart::Noon),
    (18, DayPart::Afternoon),
    (21, DayPart::Evening),
    (23, DayPart::Night),
];

/// Used for hours at or past the last threshold.
const FALLBACK_DAY_PART: DayPart = DayPart::Night;

// ---------------------------------------------------------------------------
// Hebrew date
// ---------------------------------------------------------------------------

/// `"{day} {month} {year}"`, e.g. `יד אדר ב תשפ"ד`.
pub fn format_hebrew_date(date: &CalendarDate) -> Result<String> {
    let day = encode_day_number(u32::from(date.day_of_month));
    let month = date.month.hebrew_name();
    let year = encode_year_number(date.year)?;
    Ok(format!("{day} {month} {year}"))
}

pub fn format_hebrew_date_string<Tz: TimeZone>(
    now: &DateTime<Tz>,
    calendar: &dyn HebrewCalendar,
) -> Result<String> {
    let date = calendar.to_hebrew(now.date_naive())?;
    format_hebrew_date(&date)
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

pub fn format_weekday(date: &CalendarDate) -> String {
    let index = date.weekday.num_days_from_sunday() as usize;
    format!("{DAY_PREFIX}{}", WEEKDAY_NAMES[index])
}

pub fn format_weekday_string<Tz: TimeZone>(
    now: &DateTime<Tz>,
    calendar: &dyn HebrewCalendar,
) -> Result<String> {
    let date = calendar.to_hebrew(now.date_naive())?;
    Ok(format_weekday(&date))
}

// ---------------------------------------------------------------------------
// Part of day
// ---------------------------------------------------------------------------

/// First part whose threshold is strictly greater than `hour`.
pub fn day_part_for_hour(hour: u32) -> DayPart {
    let idx = DAY_PARTS.partition_point(|(threshold, _)| *threshold <= hour);
    DAY_PARTS
        .get(idx)
        .map(|(_, part)| *part)
        .unwrap_or(FALLBACK_DAY_PART)
}

pub fn format_part_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> &'static str {
    day_part_for_hour(now.hour()).hebrew_label()
}

// ---------------------------------------------------------------------------
// ClockSnapshot
// ---------------------------------------------------------------------------

/// Everything the clock shows for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub timestamp: DateTime<chrono::FixedOffset>,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew_date: Option<String>,
    pub hebrew_weekday: String,
    pub part_of_day: String,
}

/// What to render into a [`ClockSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub time_format: String,
    pub show_hebrew_date: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            time_format: crate::config::DEFAULT_TIME_FORMAT.to_string(),
            show_hebrew_date: true,
        }
    }
}

/// Build a snapshot from a single calendar conversion.
pub fn snapshot<Tz: TimeZone>(
    now: &DateTime<Tz>,
    calendar: &dyn HebrewCalendar,
    options: &SnapshotOptions,
) -> Result<ClockSnapshot> {
    if !is_valid_time_format(&options.time_format) {
        return Err(LuachError::InvalidConfig(format!(
            "invalid time format '{}'",
            options.time_format
        )));
    }
    let timestamp = now.fixed_offset();
    let mut time = String::new();
    write!(time, "{}", timestamp.format(&options.time_format)).map_err(|_| {
        LuachError::InvalidConfig(format!(
            "time format '{}' cannot be rendered",
            options.time_format
        ))
    })?;

    let date = calendar.to_hebrew(now.date_naive())?;
    let hebrew_date = if options.show_hebrew_date {
        Some(format_hebrew_date(&date)?)
    } else {
        None
    };
    Ok(ClockSnapshot {
        timestamp,
        time,
        hebrew_date,
        hebrew_weekday: format_weekday(&date),
        part_of_day: format_part_of_day(now).to_string(),
    })
}

/// True when every item of a strftime pattern parses.
pub fn is_valid_time_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
