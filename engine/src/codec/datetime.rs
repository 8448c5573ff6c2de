//! `xsd:dateTime` in RFC 3339 form.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use super::{expect_str, CodecError};

/// Decodes an RFC 3339 timestamp, keeping its original offset.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] for non-strings and [`CodecError::Syntax`]
/// when the text is neither full RFC 3339 nor the seconds-less variant.
pub fn decode(value: &Value) -> Result<DateTime<FixedOffset>, CodecError> {
    let text = expect_str(value, "datetime string")?;
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => with_seconds(text)
            .and_then(|padded| DateTime::parse_from_rfc3339(&padded).ok())
            .ok_or_else(|| CodecError::syntax("datetime", e)),
    }
}

/// Pads the seconds-less form some publishers emit (`2006-01-02T15:04Z`).
fn with_seconds(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let minutes_end = 16;
    if bytes.len() <= minutes_end || bytes[13] != b':' || bytes[minutes_end] == b':' {
        return None;
    }
    if !text.is_char_boundary(minutes_end) {
        return None;
    }
    Some(format!("{}:00{}", &text[..minutes_end], &text[minutes_end..]))
}

/// Encodes a timestamp as RFC 3339, using `Z` for a zero offset and emitting
/// fractional seconds only when present.
#[must_use]
pub fn encode(value: &DateTime<FixedOffset>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn utc_round_trips_verbatim() {
        let raw = json!("2020-01-01T00:00:00Z");
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(encode(&decoded), raw);
    }

    #[test]
    fn keeps_non_zero_offset() {
        let raw = json!("2021-06-01T12:30:00+02:00");
        assert_eq!(encode(&decode(&raw).unwrap()), raw);
    }

    #[test]
    fn accepts_missing_seconds() {
        let decoded = decode(&json!("2020-01-01T10:15Z")).unwrap();
        assert_eq!(decoded, Utc.with_ymd_and_hms(2020, 1, 1, 10, 15, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode(&json!("yesterday")), Err(CodecError::Syntax { .. })));
        assert!(matches!(decode(&json!(20200101)), Err(CodecError::Shape { .. })));
    }
}
