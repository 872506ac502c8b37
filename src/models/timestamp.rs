use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::decode::Decode;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueFormat, PgValueRef, Postgres};
use sqlx::types::Type;

/// Microseconds between the Unix epoch and the Postgres epoch (2000-01-01).
const PG_EPOCH_OFFSET_MICROS: i64 = 946_684_800_000_000;

/// A `TIMESTAMP` column read as UTC.
///
/// Decoding is checked: `infinity`, `-infinity` and anything outside
/// chrono's range come back as a decode error for that row instead of a
/// panic inside the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Converts the binary wire value (microseconds since 2000-01-01).
    pub fn from_pg_micros(micros: i64) -> Option<Self> {
        micros
            .checked_add(PG_EPOCH_OFFSET_MICROS)
            .and_then(DateTime::<Utc>::from_timestamp_micros)
            .map(Self)
    }

    /// Converts the text wire value, e.g. `2025-01-03 12:00:00.5`.
    pub fn from_pg_text(text: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Type<Postgres> for Timestamp {
    fn type_info() -> PgTypeInfo {
        <NaiveDateTime as Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Timestamp {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let decoded = match value.format() {
            PgValueFormat::Binary => {
                let micros = <i64 as Decode<Postgres>>::decode(value)?;
                Self::from_pg_micros(micros)
                    .ok_or_else(|| format!("timestamp out of range: {micros} us since 2000-01-01"))?
            }
            PgValueFormat::Text => {
                let text = value.as_str()?;
                Self::from_pg_text(text).ok_or_else(|| format!("timestamp out of range: {text}"))?
            }
        };
        Ok(decoded)
    }
}
