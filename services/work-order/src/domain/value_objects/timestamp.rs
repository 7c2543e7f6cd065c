//! 工单时间戳
//!
//! 存储为不带时区的 `TIMESTAMP`。带偏移量的输入统一换算为 UTC。

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_utc()))
            .map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e| {
            de::Error::custom(format!("invalid ISO-8601 datetime `{}`: {}", raw, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_naive() {
        let ts: Timestamp = "2024-01-01T09:00:00".parse().unwrap();
        assert_eq!(ts.as_naive(), nine_am());
    }

    #[test]
    fn test_parse_space_separator() {
        let ts: Timestamp = "2024-01-01 09:00:00".parse().unwrap();
        assert_eq!(ts.as_naive(), nine_am());
    }

    #[test]
    fn test_parse_with_offset_normalizes_to_utc() {
        let utc: Timestamp = "2024-01-01T09:00:00Z".parse().unwrap();
        assert_eq!(utc.as_naive(), nine_am());

        let shifted: Timestamp = "2024-01-01T11:00:00+02:00".parse().unwrap();
        assert_eq!(shifted.as_naive(), nine_am());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!("2024-13-01T09:00:00".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_serialize_iso8601() {
        let json = serde_json::to_string(&Timestamp::new(nine_am())).unwrap();
        assert_eq!(json, r#""2024-01-01T09:00:00""#);

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_naive(), nine_am());
    }
}
