use serde::{Deserialize, Deserializer, Serializer};
use time::OffsetDateTime;

/// Deserialize integer seconds since the Unix epoch into a UTC OffsetDateTime
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    OffsetDateTime::from_unix_timestamp(seconds).map_err(serde::de::Error::custom)
}

/// Serialize an OffsetDateTime as integer seconds since the Unix epoch
pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(datetime.unix_timestamp())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::datetime;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "crate::utils::time")]
        created: time::OffsetDateTime,
    }

    #[test]
    fn epoch_seconds_become_utc() {
        let stamped: Stamped = serde_json::from_str(r#"{"created":1677649420}"#).unwrap();
        assert_eq!(stamped.created, datetime!(2023-03-01 05:43:40 UTC));
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"created":1677649420}"#
        );
    }

    #[test]
    fn rejects_non_integer() {
        assert!(serde_json::from_str::<Stamped>(r#"{"created":"yesterday"}"#).is_err());
    }
}
