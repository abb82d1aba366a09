//! Millisecond epoch timestamps as used throughout the API.

use time::OffsetDateTime;
use time::error::ComponentRange;

/// Convert a millisecond unix timestamp into an [`OffsetDateTime`] in UTC.
pub fn from_millis(millis: i64) -> Result<OffsetDateTime, ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
}
