// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use time::{Date, PrimitiveDateTime, Time};

/// Parses a free-form range like `"9a - 5p"` into the start and end instants
/// on the given calendar date.
///
/// Grammar: exactly one `-` separator; each side is a 12-hour clock time
/// with an optional `:minutes` part and an optional case-insensitive
/// `a`/`p`/`am`/`pm` suffix. A missing suffix means AM. Malformed input is
/// an error, never a partial result.
pub fn parse_time_range(text: &str, date: Date) -> Result<(PrimitiveDateTime, PrimitiveDateTime)> {
    let mut parts = text.split('-');
    let (Some(start_raw), Some(end_raw), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected a time range like '9a - 5p' with exactly one '-'");
    };

    let start = parse_clock(start_raw)?;
    let end = parse_clock(end_raw)?;
    Ok((
        PrimitiveDateTime::new(date, start),
        PrimitiveDateTime::new(date, end),
    ))
}

/// Parses one side of a range: `9`, `9:30`, `9a`, `9:30pm`, case-insensitive.
fn parse_clock(raw: &str) -> Result<Time> {
    let normalized: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if normalized.is_empty() {
        bail!("empty time in range; expected something like '9a' or '9:30p'");
    }

    let (digits, is_pm) = if let Some(rest) = strip_meridiem(&normalized, 'p') {
        (rest, true)
    } else if let Some(rest) = strip_meridiem(&normalized, 'a') {
        (rest, false)
    } else {
        (normalized.as_str(), false)
    };

    let (hour_raw, minute_raw) = match digits.split_once(':') {
        Some((hour, minute)) => (hour, Some(minute)),
        None => (digits, None),
    };

    let hour: u8 = hour_raw
        .parse()
        .with_context(|| format!("invalid hour in time {raw:?}"))?;
    if !(1..=12).contains(&hour) {
        bail!("hour in {raw:?} must be 1-12 on a 12-hour clock");
    }

    let minute: u8 = match minute_raw {
        Some(minute) => minute
            .parse()
            .with_context(|| format!("invalid minutes in time {raw:?}"))?,
        None => 0,
    };

    let hour_24 = match (is_pm, hour) {
        (true, 12) => 12,
        (true, hour) => hour + 12,
        (false, 12) => 0,
        (false, hour) => hour,
    };

    Time::from_hms(hour_24, minute, 0).with_context(|| format!("time {raw:?} out of range"))
}

fn strip_meridiem(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_suffix('m').unwrap_or(text);
    rest.strip_suffix(marker)
}

#[cfg(test)]
mod tests {
    use super::parse_time_range;
    use anyhow::Result;
    use time::{Date, Month};

    fn date() -> Result<Date> {
        Ok(Date::from_calendar_date(2024, Month::January, 15)?)
    }

    #[test]
    fn workday_range_parses() -> Result<()> {
        let (start, end) = parse_time_range("9a - 5p", date()?)?;
        assert_eq!(start.date(), date()?);
        assert_eq!((start.hour(), start.minute()), (9, 0));
        assert_eq!((end.hour(), end.minute()), (17, 0));
        Ok(())
    }

    #[test]
    fn twelve_oclock_edge_cases() -> Result<()> {
        let (start, end) = parse_time_range("12a - 1p", date()?)?;
        assert_eq!(start.hour(), 0);
        assert_eq!(end.hour(), 13);

        let (noon, _) = parse_time_range("12p - 1p", date()?)?;
        assert_eq!(noon.hour(), 12);
        Ok(())
    }

    #[test]
    fn minutes_are_preserved() -> Result<()> {
        let (start, end) = parse_time_range("9:30a-5p", date()?)?;
        assert_eq!((start.hour(), start.minute()), (9, 30));
        assert_eq!(end.hour(), 17);
        Ok(())
    }

    #[test]
    fn long_suffixes_and_mixed_case_accepted() -> Result<()> {
        let (start, end) = parse_time_range("9AM - 5:15PM", date()?)?;
        assert_eq!(start.hour(), 9);
        assert_eq!((end.hour(), end.minute()), (17, 15));
        Ok(())
    }

    #[test]
    fn missing_suffix_means_am() -> Result<()> {
        let (start, end) = parse_time_range("9 - 11:45", date()?)?;
        assert_eq!(start.hour(), 9);
        assert_eq!((end.hour(), end.minute()), (11, 45));
        Ok(())
    }

    #[test]
    fn malformed_input_is_rejected() -> Result<()> {
        for bad in ["9a", "9a - 5p - 7p", "13a - 5p", "0a - 5p", "9:75a - 5p", "x - 5p", "- 5p"] {
            assert!(
                parse_time_range(bad, date()?).is_err(),
                "{bad:?} should not parse"
            );
        }
        Ok(())
    }
}
