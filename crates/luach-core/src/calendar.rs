//! Gregorian → Hebrew date conversion.
//!
//! Calendar arithmetic lives in `icu_calendar`; this module only adapts its
//! output to [`CalendarDate`].

use crate::error::{LuachError, Result};
use crate::types::{CalendarDate, HebrewMonth};
use chrono::{Datelike, NaiveDate};
use icu_calendar::hebrew::Hebrew;
use icu_calendar::Date;

/// Converts a civil (Gregorian) date into the Hebrew calendar.
pub trait HebrewCalendar: Send + Sync {
    fn to_hebrew(&self, date: NaiveDate) -> Result<CalendarDate>;
}

/// [`HebrewCalendar`] backed by ICU4X.
///
/// The Hebrew day is taken from the civil date; it does not advance at
/// sunset.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuHebrewCalendar;

impl IcuHebrewCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl HebrewCalendar for IcuHebrewCalendar {
    fn to_hebrew(&self, date: NaiveDate) -> Result<CalendarDate> {
        let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
            .map_err(|e| LuachError::Calendar(format!("{date}: {e}")))?;
        let hebrew = iso.to_calendar(Hebrew::new());

        let code = hebrew.month().code;
        let month = month_from_code(code.0.as_str())?;
        let day_of_month = u8::try_from(hebrew.day_of_month().0)
            .map_err(|_| LuachError::Calendar(format!("{date}: day of month out of range")))?;

        Ok(CalendarDate {
            year: hebrew.year().number,
            month,
            day_of_month,
            weekday: date.weekday(),
        })
    }
}

/// Map a CLDR month code (`M01`..`M12`, `M05L`, `M06L`) onto [`HebrewMonth`].
///
/// Leap years carry `M05L` (Adar I) and `M06L` (Adar II) in place of `M06`.
pub fn month_from_code(code: &str) -> Result<HebrewMonth> {
    let month = match code {
        "M01" => HebrewMonth::Tishrei,
        "M02" => HebrewMonth::Cheshvan,
        "M03" => HebrewMonth::Kislev,
        "M04" => HebrewMonth::Tevet,
        "M05" => HebrewMonth::Shevat,
        "M05L" => HebrewMonth::AdarI,
        "M06" => HebrewMonth::Adar,
        "M06L" => HebrewMonth::AdarII,
        "M07" => HebrewMonth::Nisan,
        "M08" => HebrewMonth::Iyar,
        "M09" => HebrewMonth::Sivan,
        "M10" => HebrewMonth::Tammuz,
        "M11" => HebrewMonth::Av,
        "M12" => HebrewMonth::Elul,
        other => {
            return Err(LuachError::Calendar(format!(
                "unrecognised Hebrew month code '{other}'"
            )))
        }
    };
    Ok(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::collections::HashSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rosh_hashana_5784() {
        let date = IcuHebrewCalendar::new().to_hebrew(ymd(2023, 9, 16)).unwrap();
        assert_eq!(date.year, 5784);
        assert_eq!(date.month, HebrewMonth::Tishrei);
        assert_eq!(date.day_of_month, 1);
        assert_eq!(date.weekday, Weekday::Sat);
    }

    #[test]
    fn purim_in_leap_year_is_adar_ii() {
        let date = IcuHebrewCalendar::new().to_hebrew(ymd(2024, 3, 24)).unwrap();
        assert_eq!(date.year, 5784);
        assert_eq!(date.month, HebrewMonth::AdarII);
        assert_eq!(date.day_of_month, 14);
        assert_eq!(date.weekday, Weekday::Sun);
    }

    #[test]
    fn adar_i_in_leap_year() {
        let date = IcuHebrewCalendar::new().to_hebrew(ymd(2024, 2, 20)).unwrap();
        assert_eq!(date.year, 5784);
        assert_eq!(date.month, HebrewMonth::AdarI);
        assert_eq!(date.day_of_month, 11);
        assert_eq!(date.weekday, Weekday::Tue);
    }

    #[test]
    fn purim_in_common_year_is_adar() {
        let date = IcuHebrewCalendar::new().to_hebrew(ymd(2023, 3, 7)).unwrap();
        assert_eq!(date.year, 5783);
        assert_eq!(date.month, HebrewMonth::Adar);
        assert_eq!(date.day_of_month, 14);
    }

    #[test]
    fn month_codes_resolve() {
        assert_eq!(month_from_code("M06").unwrap(), HebrewMonth::Adar);
        assert_eq!(month_from_code("M05L").unwrap(), HebrewMonth::AdarI);
        assert_eq!(month_from_code("M06L").unwrap(), HebrewMonth::AdarII);
        assert_eq!(month_from_code("M07").unwrap(), HebrewMonth::Nisan);
        assert!(month_from_code("M13").is_err());
        assert!(month_from_code("M07L").is_err());
    }

    #[test]
    fn every_day_over_several_years_converts() {
        let calendar = IcuHebrewCalendar::new();
        let mut seen = HashSet::new();
        let mut day = ymd(2019, 1, 1);
        let end = ymd(2027, 12, 31);
        while day <= end {
            let date = calendar.to_hebrew(day).unwrap();
            assert!((1..=30).contains(&date.day_of_month), "{day}: {date:?}");
            assert!((5000..=6000).contains(&date.year), "{day}: {date:?}");
            seen.insert(date.month);
            day = day.succ_opt().unwrap();
        }
        // 2019–2027 spans both common and leap years.
        for month in HebrewMonth::all() {
            assert!(seen.contains(month), "{month} never produced");
        }
    }
}
