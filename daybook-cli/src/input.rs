//! Parsing of dates, months, times and durations typed by the user.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use daybook_core::grid::MonthCursor;
use daybook_core::{DateKey, TimeOfDay};

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("tmrw", "tomorrow"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    lower_words(input)
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lower_words(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_lowercase)
}

/// A day as `YYYY-MM-DD` or in natural language ("tomorrow", "next fri").
pub fn parse_date(input: &str) -> Result<DateKey> {
    if let Ok(key) = input.trim().parse::<DateKey>() {
        return Ok(key);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(DateKey::new(dt.date()))
}

/// A month as `YYYY-MM`.
pub fn parse_month(input: &str) -> Result<MonthCursor> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month \"{}\". Expected YYYY-MM", input))?;
    Ok(MonthCursor::containing(DateKey::new(first)))
}

pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    Ok(input.parse::<TimeOfDay>()?)
}

/// Apply a duration such as "30m" or "1h 30m" to a start time.
pub fn apply_duration(start: TimeOfDay, dur_input: &str) -> Result<TimeOfDay> {
    let std_dur = humantime::parse_duration(dur_input)
        .with_context(|| format!("Could not parse duration: \"{}\"", dur_input))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    start
        .checked_add(chrono_dur)
        .ok_or_else(|| anyhow::anyhow!("Event would run past midnight"))
}

/// An end given either as a time of day or as a duration from `start`.
pub fn parse_end(input: &str, start: TimeOfDay) -> Result<TimeOfDay> {
    let cleaned = input
        .trim()
        .strip_prefix("until ")
        .or_else(|| input.trim().strip_prefix("to "))
        .unwrap_or(input.trim());

    if let Ok(end) = parse_time(cleaned) {
        return Ok(end);
    }
    apply_duration(start, cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("Sat"), "saturday");
        assert_eq!(expand_abbreviations("tmrw"), "tomorrow");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_other_words() {
        assert_eq!(expand_abbreviations("next  monday"), "next monday");
    }

    #[test]
    fn parse_date_canonical_key() {
        assert_eq!(parse_date("2025-03-20").unwrap().to_string(), "2025-03-20");
    }

    #[test]
    fn parse_date_relative() {
        assert!(parse_date("tomorrow").is_ok());
        assert!(parse_date("next fri").is_ok());
    }

    #[test]
    fn parse_date_garbage() {
        assert!(parse_date("not a date at all xyz").is_err());
    }

    #[test]
    fn parse_month_zero_based() {
        let cursor = parse_month("2025-03").unwrap();
        assert_eq!(cursor.year, 2025);
        assert_eq!(cursor.month0, 2);
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn duration_end() {
        assert_eq!(apply_duration(t("09:00"), "45m").unwrap(), t("09:45"));
        assert_eq!(apply_duration(t("09:00"), "1h 30m").unwrap(), t("10:30"));
        assert!(apply_duration(t("23:30"), "1h").is_err());
        assert!(apply_duration(t("09:00"), "soon").is_err());
    }

    #[test]
    fn end_as_time_or_duration() {
        assert_eq!(parse_end("10:15", t("09:00")).unwrap(), t("10:15"));
        assert_eq!(parse_end("until 11:00", t("09:00")).unwrap(), t("11:00"));
        assert_eq!(parse_end("2h", t("09:00")).unwrap(), t("11:00"));
    }
}
