use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// HebrewMonth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    #[serde(rename = "adar_i")]
    AdarI,
    #[serde(rename = "adar_ii")]
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl HebrewMonth {
    pub fn all() -> &'static [HebrewMonth] {
        &[
            HebrewMonth::Tishrei,
            HebrewMonth::Cheshvan,
            HebrewMonth::Kislev,
            HebrewMonth::Tevet,
            HebrewMonth::Shevat,
            HebrewMonth::Adar,
            HebrewMonth::AdarI,
            HebrewMonth::AdarII,
            HebrewMonth::Nisan,
            HebrewMonth::Iyar,
            HebrewMonth::Sivan,
            HebrewMonth::Tammuz,
            HebrewMonth::Av,
            HebrewMonth::Elul,
        ]
    }

    /// English transliteration used as the lookup key.
    pub fn canonical_name(self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        }
    }

    pub fn hebrew_name(self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Tevet => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar => "אדר",
            HebrewMonth::AdarI => "אדר א",
            HebrewMonth::AdarII => "אדר ב",
            HebrewMonth::Nisan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl std::str::FromStr for HebrewMonth {
    type Err = crate::error::LuachError;

    /// Accepts the canonical names plus the spellings calendar libraries
    /// commonly emit (`Sh'vat`, `Iyyar`, `Tamuz`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Tishrei" | "Tishri" => Ok(HebrewMonth::Tishrei),
            "Cheshvan" | "Heshvan" | "Marcheshvan" => Ok(HebrewMonth::Cheshvan),
            "Kislev" => Ok(HebrewMonth::Kislev),
            "Tevet" | "Teves" | "Teveth" => Ok(HebrewMonth::Tevet),
            "Shevat" | "Sh'vat" | "Shvat" => Ok(HebrewMonth::Shevat),
            "Adar" => Ok(HebrewMonth::Adar),
            "Adar I" | "Adar 1" => Ok(HebrewMonth::AdarI),
            "Adar II" | "Adar 2" => Ok(HebrewMonth::AdarII),
            "Nisan" | "Nissan" => Ok(HebrewMonth::Nisan),
            "Iyar" | "Iyyar" => Ok(HebrewMonth::Iyar),
            "Sivan" => Ok(HebrewMonth::Sivan),
            "Tammuz" | "Tamuz" => Ok(HebrewMonth::Tammuz),
            "Av" => Ok(HebrewMonth::Av),
            "Elul" => Ok(HebrewMonth::Elul),
            other => Err(crate::error::LuachError::UnknownMonth(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DayPart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Night,
    Morning,
    Noon,
    Afternoon,
    Evening,
}

impl DayPart {
    pub fn as_str(self) -> &'static str {
        match self {
            DayPart::Night => "night",
            DayPart::Morning => "morning",
            DayPart::Noon => "noon",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        }
    }

    pub fn hebrew_label(self) -> &'static str {
        match self {
            DayPart::Night => "לילה",
            DayPart::Morning => "בוקר",
            DayPart::Noon => "צהריים",
            DayPart::Afternoon => "אחר הצהריים",
            DayPart::Evening => "ערב",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CalendarDate
// ---------------------------------------------------------------------------

/// A date as reported by the Hebrew calendar collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    /// Anno Mundi year, e.g. 5784.
    pub year: i32,
    pub month: HebrewMonth,
    /// 1–30.
    pub day_of_month: u8,
    pub weekday: Weekday,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_month_has_a_hebrew_name() {
        for month in HebrewMonth::all() {
            assert!(!month.hebrew_name().is_empty(), "{month} has no name");
        }
    }

    #[test]
    fn canonical_names_roundtrip() {
        for month in HebrewMonth::all() {
            let parsed = HebrewMonth::from_str(month.canonical_name()).unwrap();
            assert_eq!(parsed, *month);
        }
    }

    #[test]
    fn library_spellings_are_recognised() {
        assert_eq!(HebrewMonth::from_str("Sh'vat").unwrap(), HebrewMonth::Shevat);
        assert_eq!(HebrewMonth::from_str("Iyyar").unwrap(), HebrewMonth::Iyar);
        assert_eq!(HebrewMonth::from_str("Tamuz").unwrap(), HebrewMonth::Tammuz);
        assert_eq!(HebrewMonth::from_str("Heshvan").unwrap(), HebrewMonth::Cheshvan);
    }

    #[test]
    fn leap_adar_names() {
        assert_eq!(HebrewMonth::AdarI.hebrew_name(), "אדר א");
        assert_eq!(HebrewMonth::AdarII.hebrew_name(), "אדר ב");
    }

    #[test]
    fn unknown_month_is_an_error() {
        let err = HebrewMonth::from_str("Thermidor").unwrap_err();
        assert!(err.to_string().contains("Thermidor"));
    }

    #[test]
    fn month_serde_names() {
        let yaml = serde_yaml::to_string(&HebrewMonth::AdarII).unwrap();
        assert_eq!(yaml.trim(), "adar_ii");
        let parsed: HebrewMonth = serde_yaml::from_str("adar_i").unwrap();
        assert_eq!(parsed, HebrewMonth::AdarI);
    }
}
