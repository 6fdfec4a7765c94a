use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Opaque record identifier, unique within its collection.
///
/// New records get a hyphenated v4 UUID. Any other non-empty string is kept
/// verbatim, so ledgers written with short numeric ids (`"1"`,
/// `"1691234567890"`) load and save unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        let value = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        };
        if value.trim().is_empty() {
            return Err(de::Error::custom("record id must not be empty"));
        }
        Ok(Self(value))
    }
}

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &RecordId;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Serde helpers for calendar dates stored as ISO-8601 strings.
///
/// Dates are written as `YYYY-MM-DD`. On read, full timestamps such as
/// `2023-07-31T22:00:00.000Z` are accepted as well. Those were written from a
/// local midnight converted to UTC, so they are shifted back into the local
/// zone before the date is taken.
pub mod iso_date {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
    }

    /// Parses a date from any of the accepted ISO-8601 shapes, reading
    /// offset timestamps in the local zone.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        parse_in(raw, &Local)
    }

    /// Like [`parse`], with offset timestamps read in `zone`.
    pub fn parse_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
        let value = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Some(date);
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
            return Some(stamp.with_timezone(zone).date_naive());
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.date())
    }
}

#[cfg(test)]
mod tests {
    use super::{iso_date, RecordId};
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn parses_plain_and_timestamped_dates() {
        let expected = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        assert_eq!(iso_date::parse("2023-08-01"), Some(expected));
        assert_eq!(iso_date::parse("2023-08-01T12:00:00.000Z"), Some(expected));
        assert_eq!(iso_date::parse("2023-08-01T09:15:00"), Some(expected));
    }

    #[test]
    fn utc_stamps_are_read_in_the_given_zone() {
        let aug_1 = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            iso_date::parse_in("2023-07-31T22:00:00.000Z", &plus_two),
            Some(aug_1)
        );
        assert_eq!(
            iso_date::parse_in("2023-08-01T05:00:00.000Z", &minus_five),
            Some(aug_1)
        );
        assert_eq!(
            iso_date::parse_in("2023-07-31T22:00:00.000Z", &Utc),
            NaiveDate::from_ymd_opt(2023, 7, 31)
        );
    }

    #[test]
    fn record_ids_accept_legacy_shapes() {
        let text: RecordId = serde_json::from_str("\"1691234567890\"").unwrap();
        assert_eq!(text.as_str(), "1691234567890");
        let number: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(number, RecordId::from("42"));
        assert!(serde_json::from_str::<RecordId>("\"  \"").is_err());
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"1691234567890\"");
    }

    #[test]
    fn generated_ids_are_uuids() {
        let id = RecordId::generate();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, RecordId::generate());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(iso_date::parse("yesterday"), None);
        assert_eq!(iso_date::parse(""), None);
    }
}
