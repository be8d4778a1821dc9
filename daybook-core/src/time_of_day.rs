//! Wall-clock time within a single day.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::TIME_FORMAT;
use crate::error::DaybookError;

/// A minute-precision time of day.
///
/// Serialized as zero-padded 24-hour `HH:MM`, so the chronological order
/// and the lexical order of the stored strings agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add a duration, or `None` if the result falls on another day.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let (time, wrapped_secs) = self.0.overflowing_add_signed(duration);
        if wrapped_secs != 0 || duration < Duration::zero() {
            return None;
        }
        Some(TimeOfDay(truncate_seconds(time)))
    }
}

fn truncate_seconds(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, TIME_FORMAT))
            .map(|t| TimeOfDay(truncate_seconds(t)))
            .map_err(|_| DaybookError::InvalidTime(s.to_string()))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn parses_hours_and_minutes() {
        let time = t("09:30");
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(t("14:05:59"), t("14:05"));
        assert_eq!(t("14:05:59").to_string(), "14:05");
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn rejects_garbage() {
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn order_matches_serialized_order() {
        let times = ["00:00", "08:59", "09:00", "12:30", "23:59"];
        for pair in times.windows(2) {
            assert!(t(pair[0]) < t(pair[1]));
            assert!(t(pair[0]).to_string() < t(pair[1]).to_string());
        }
    }

    #[test]
    fn checked_add_stays_within_day() {
        assert_eq!(t("09:00").checked_add(Duration::minutes(90)), Some(t("10:30")));
        assert_eq!(t("23:00").checked_add(Duration::hours(2)), None);
        assert_eq!(t("09:00").checked_add(Duration::minutes(-10)), None);
    }
}
