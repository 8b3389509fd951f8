use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn previous_day(self) -> Self {
        self.add_days(-1)
    }

    /// Days since 0001-01-01, used to rotate daily content.
    pub fn day_number(self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(Self)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional dates stored as `""` when absent.
pub mod empty_as_none {
    use super::CalendarDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<CalendarDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.collect_str(date),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<CalendarDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_day_crosses_month_and_year() {
        let date = CalendarDate::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(date.previous_day().to_string(), "2025-12-31");

        let leap = CalendarDate::from_ymd(2028, 3, 1).unwrap();
        assert_eq!(leap.previous_day().to_string(), "2028-02-29");
    }

    #[test]
    fn parses_and_formats_iso_dates() {
        let date: CalendarDate = "2026-10-07".parse().unwrap();
        assert_eq!(date, CalendarDate::from_ymd(2026, 10, 7).unwrap());
        assert_eq!(date.add_days(30).to_string(), "2026-11-06");
        assert!("10/07/2026".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn empty_string_round_trips_as_none() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            #[serde(default, with = "empty_as_none")]
            date: Option<CalendarDate>,
        }

        let holder: Holder = serde_json::from_str(r#"{"date":""}"#).unwrap();
        assert!(holder.date.is_none());
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"date":""}"#);

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.date.is_none());

        let holder: Holder = serde_json::from_str(r#"{"date":"2026-02-03"}"#).unwrap();
        assert_eq!(holder.date.unwrap().to_string(), "2026-02-03");
    }
}
