use std::fmt;

use time::OffsetDateTime;

/// Point in time with millisecond precision.
///
/// The document store persists all `createdAt`/`updatedAt` fields as
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1000)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0 / 1000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_milliseconds() {
        let t1 = Timestamp::now();
        let ms = t1.into_milliseconds();
        let t2 = Timestamp::from_milliseconds(ms);
        assert_eq!(t1, t2);
    }

    #[test]
    fn second_precision_drops_sub_second_part() {
        let t = Timestamp::from_milliseconds(12_345_678);
        assert_eq!(t.into_seconds(), 12_345);
    }

    #[test]
    fn round_trip_through_offset_date_time() {
        let t1 = Timestamp::from_milliseconds(1_700_000_000_123);
        let dt = OffsetDateTime::from(t1);
        let t2 = Timestamp::from(dt);
        assert_eq!(t1, t2);
    }
}
