//! Timestamps are persisted as RFC 3339 strings with microsecond precision.
//!
//! Reads also accept native BSON datetimes and offset-less ISO-8601 strings
//! (taken as UTC), since older documents may carry either form.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson::Bson;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

/// Current time at the precision timestamps are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, false))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::String(text) => parse(&text).map_err(D::Error::custom),
        Bson::DateTime(value) => Ok(value.to_chrono()),
        other => Err(D::Error::custom(format!(
            "expected a timestamp, found {:?}",
            other.element_type()
        ))),
    }
}

pub fn parse(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(value) => Ok(value.with_timezone(&Utc)),
        Err(err) => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| err),
    }
}
