//! `xsd:duration` in ISO 8601 form.
//!
//! A parsed duration keeps the text it was read from, so `PT90M`, `P0D` and
//! `PT1.50S` come back out exactly as written. Conversion to a fixed-length
//! [`chrono::Duration`] assumes 365-day years and 30-day months, since the
//! lexical form cannot express calendar length.

use std::fmt;

use serde_json::Value;

use super::{expect_str, CodecError};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// A parsed ISO 8601 duration.
#[derive(Debug, Clone)]
pub struct Duration {
    text: String,
    negative: bool,
    years: u64,
    months: u64,
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: f64,
}

impl Duration {
    /// Parses `[-]P[nY][nM][nW][nD][T[nH][nM][n[.n]S]]`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] describing the first offending position.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let mut out = Duration::zero();
        out.text = text.to_owned();
        let rest = match text.strip_prefix('-') {
            Some(rest) => {
                out.negative = true;
                rest
            }
            None => text,
        };
        let rest = rest
            .strip_prefix('P')
            .ok_or_else(|| CodecError::syntax("duration", "missing leading `P`"))?;
        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(CodecError::syntax("duration", "empty time part after `T`"));
                }
                (date, Some(time))
            }
            None => (rest, None),
        };
        if date.is_empty() && time.is_none() {
            return Err(CodecError::syntax("duration", "no components"));
        }

        let mut last = 0;
        for (number, designator) in components(date)? {
            let rank = match designator {
                'Y' => 1,
                'M' => 2,
                'W' => 3,
                'D' => 4,
                other => {
                    return Err(CodecError::syntax(
                        "duration",
                        format!("unexpected designator `{other}` in date part"),
                    ))
                }
            };
            if rank <= last {
                return Err(CodecError::syntax("duration", "date components out of order"));
            }
            last = rank;
            let value = whole(number)?;
            match designator {
                'Y' => out.years = value,
                'M' => out.months = value,
                'W' => out.weeks = value,
                _ => out.days = value,
            }
        }

        if let Some(time) = time {
            let mut last = 0;
            for (number, designator) in components(time)? {
                let rank = match designator {
                    'H' => 1,
                    'M' => 2,
                    'S' => 3,
                    other => {
                        return Err(CodecError::syntax(
                            "duration",
                            format!("unexpected designator `{other}` in time part"),
                        ))
                    }
                };
                if rank <= last {
                    return Err(CodecError::syntax("duration", "time components out of order"));
                }
                last = rank;
                match designator {
                    'H' => out.hours = whole(number)?,
                    'M' => out.minutes = whole(number)?,
                    _ => {
                        out.seconds = number
                            .parse::<f64>()
                            .map_err(|e| CodecError::syntax("duration", e))?;
                    }
                }
            }
        }
        Ok(out)
    }

    fn zero() -> Self {
        Duration {
            text: String::new(),
            negative: false,
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0.0,
        }
    }

    /// Builds a duration from a fixed-length one, using the same 365-day
    /// year and 30-day month assumptions as [`Duration::to_chrono`]. The
    /// text is the canonical form: zero components are left out.
    #[must_use]
    pub fn from_chrono(value: chrono::Duration) -> Self {
        let negative = value < chrono::Duration::zero();
        let mut remaining = value.num_milliseconds().unsigned_abs();
        let mut take = |unit_ms: u64| {
            let n = remaining / unit_ms;
            remaining -= n * unit_ms;
            n
        };
        let day_ms = 86_400_000;
        let mut out = Duration {
            negative,
            years: take(365 * day_ms),
            months: take(30 * day_ms),
            days: take(day_ms),
            hours: take(3_600_000),
            minutes: take(60_000),
            seconds: take(1) as f64 / 1_000.0,
            ..Duration::zero()
        };
        out.text = out.canonical();
        out
    }

    fn canonical(&self) -> String {
        let mut text = String::new();
        if self.negative {
            text.push('-');
        }
        text.push('P');
        let date = [(self.years, 'Y'), (self.months, 'M'), (self.weeks, 'W'), (self.days, 'D')];
        for (n, designator) in date {
            if n != 0 {
                text.push_str(&format!("{n}{designator}"));
            }
        }
        if self.hours != 0 || self.minutes != 0 || self.seconds != 0.0 {
            text.push('T');
            if self.hours != 0 {
                text.push_str(&format!("{}H", self.hours));
            }
            if self.minutes != 0 {
                text.push_str(&format!("{}M", self.minutes));
            }
            if self.seconds != 0.0 {
                text.push_str(&format!("{}S", self.seconds));
            }
        } else if date.iter().all(|(n, _)| *n == 0) {
            text.push_str("T0S");
        }
        text
    }

    /// The lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `true` for a leading `-`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The `nY` component.
    #[must_use]
    pub fn years(&self) -> u64 {
        self.years
    }

    /// The `nM` component before the `T`.
    #[must_use]
    pub fn months(&self) -> u64 {
        self.months
    }

    /// The `nW` component.
    #[must_use]
    pub fn weeks(&self) -> u64 {
        self.weeks
    }

    /// The `nD` component.
    #[must_use]
    pub fn days(&self) -> u64 {
        self.days
    }

    /// The `nH` component.
    #[must_use]
    pub fn hours(&self) -> u64 {
        self.hours
    }

    /// The `nM` component after the `T`.
    #[must_use]
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// The `nS` component, possibly fractional.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Converts to a fixed-length duration (millisecond precision).
    #[must_use]
    pub fn to_chrono(&self) -> chrono::Duration {
        let days = self.years as f64 * DAYS_PER_YEAR
            + self.months as f64 * DAYS_PER_MONTH
            + self.weeks as f64 * DAYS_PER_WEEK
            + self.days as f64;
        let seconds = days * SECONDS_PER_DAY
            + self.hours as f64 * SECONDS_PER_HOUR
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.seconds;
        let millis = (seconds * 1_000.0).round() as i64;
        let out = chrono::Duration::milliseconds(millis);
        if self.negative {
            -out
        } else {
            out
        }
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits `"1Y2M"` into `[("1", 'Y'), ("2", 'M')]`.
fn components(part: &str) -> Result<Vec<(&str, char)>, CodecError> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let number = &part[start..i];
        if number.is_empty() {
            return Err(CodecError::syntax("duration", format!("designator `{c}` without a number")));
        }
        out.push((number, c));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err(CodecError::syntax("duration", "trailing number without designator"));
    }
    Ok(out)
}

fn whole(number: &str) -> Result<u64, CodecError> {
    number
        .parse::<u64>()
        .map_err(|_| CodecError::syntax("duration", format!("`{number}` is not a whole number")))
}

/// Decodes an ISO 8601 duration string.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// for malformed text.
pub fn decode(value: &Value) -> Result<Duration, CodecError> {
    Duration::parse(expect_str(value, "duration string")?)
}

/// Encodes a duration in its lexical form.
#[must_use]
pub fn encode(value: &Duration) -> Value {
    Value::String(value.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lexical_form_round_trips() {
        for text in ["PT5S", "PT90M", "P1Y2M3DT4H5M6S", "-P3W", "PT1.5S", "P2D"] {
            let parsed = Duration::parse(text).unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn zero_components_and_trailing_zeros_are_kept() {
        for text in ["P0D", "PT0H", "PT1.50S", "P1YT0S", "PT0S", "P0Y0M"] {
            let decoded = decode(&json!(text)).unwrap();
            assert_eq!(encode(&decoded), json!(text));
        }
        let padded = Duration::parse("PT1.50S").unwrap();
        assert_eq!(padded.seconds(), 1.5);
        assert_ne!(padded, Duration::parse("PT1.5S").unwrap());
    }

    #[test]
    fn converts_with_calendar_assumptions() {
        let parsed = Duration::parse("P1Y1M1DT1H").unwrap();
        let expected = chrono::Duration::days(365 + 30 + 1) + chrono::Duration::hours(1);
        assert_eq!(parsed.to_chrono(), expected);
        assert_eq!(Duration::parse("-PT2M").unwrap().to_chrono(), -chrono::Duration::minutes(2));
    }

    #[test]
    fn from_chrono_is_canonical() {
        let d = Duration::from_chrono(chrono::Duration::minutes(90));
        assert_eq!(d.to_string(), "PT1H30M");
        assert_eq!(Duration::from_chrono(chrono::Duration::zero()).to_string(), "PT0S");
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "P", "PT", "1D", "P1H", "PT1D", "P1M1Y", "P1.5D", "PTS", "P1"] {
            assert!(Duration::parse(text).is_err(), "{text} should be rejected");
        }
        assert!(decode(&json!(5)).is_err());
    }
}
