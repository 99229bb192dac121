//! Timestamp handling for itinerary times.
//!
//! Departure and arrival times are plain epoch seconds in UTC. The data
//! source hands them over already resolved to an instant, so there is no
//! timezone or calendar arithmetic here beyond conversions to `chrono`
//! types for display and duration maths.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// An instant in time, stored as whole seconds since the Unix epoch (UTC).
///
/// Totally ordered. Arithmetic with `chrono::Duration` truncates to whole
/// seconds, which is the resolution of all itinerary data.
///
/// # Examples
///
/// ```
/// use itinerary_filter::domain::Timestamp;
/// use chrono::Duration;
///
/// let t = Timestamp::from_seconds(1_700_000_000);
/// assert_eq!((t + Duration::hours(2)).seconds(), 1_700_007_200);
/// assert!(t < t + Duration::seconds(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from whole seconds since the Unix epoch.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Creates a timestamp from a UTC datetime, truncating sub-second
    /// precision.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp())
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Returns the raw second count.
    pub const fn seconds(&self) -> i64 {
        self.0
    }

    /// Converts back to a UTC datetime.
    ///
    /// Returns `None` for second counts outside chrono's representable
    /// range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }

    /// Adds a duration, truncated to whole seconds.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.num_seconds()).map(Self)
    }

    /// Subtracts a duration, truncated to whole seconds.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration.num_seconds()).map(Self)
    }

    /// Returns the duration between two timestamps.
    ///
    /// Negative when `other` is after `self`. Saturates at chrono's
    /// representable range when the timestamps are extreme enough that
    /// their difference cannot be held in a `Duration`, so this never
    /// panics.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        let seconds = self.0.saturating_sub(other.0);
        Duration::try_seconds(seconds).unwrap_or(if seconds < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("timestamp overflow")
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs).expect("timestamp underflow")
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}s", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_roundtrip() {
        let t = Timestamp::from_seconds(1_700_000_000);
        assert_eq!(t.seconds(), 1_700_000_000);
    }

    #[test]
    fn datetime_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let t = Timestamp::from_datetime(dt);
        assert_eq!(t.to_datetime(), Some(dt));
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::from_seconds(100);
        let later = Timestamp::from_seconds(200);

        assert!(earlier < later);
        assert!(later > earlier);
        assert_eq!(earlier, Timestamp::from_seconds(100));
    }

    #[test]
    fn add_duration() {
        let t = Timestamp::from_seconds(1000);
        assert_eq!((t + Duration::hours(1)).seconds(), 4600);
        assert_eq!((t + Duration::seconds(-500)).seconds(), 500);
    }

    #[test]
    fn sub_duration() {
        let t = Timestamp::from_seconds(1000);
        assert_eq!((t - Duration::minutes(10)).seconds(), 400);
    }

    #[test]
    fn duration_between() {
        let t1 = Timestamp::from_seconds(1000);
        let t2 = Timestamp::from_seconds(8200);

        assert_eq!(t2.signed_duration_since(t1), Duration::hours(2));
        assert_eq!(t1.signed_duration_since(t2), -Duration::hours(2));
    }

    #[test]
    fn duration_between_saturates_at_extremes() {
        let lo = Timestamp::from_seconds(i64::MIN / 2);
        let hi = Timestamp::from_seconds(i64::MAX / 2);

        assert_eq!(hi.signed_duration_since(lo), Duration::MAX);
        assert_eq!(lo.signed_duration_since(hi), Duration::MIN);

        // Saturating subtraction also covers differences that overflow i64.
        let min = Timestamp::from_seconds(i64::MIN);
        let max = Timestamp::from_seconds(i64::MAX);
        assert_eq!(max.signed_duration_since(min), Duration::MAX);
        assert_eq!(min.signed_duration_since(max), Duration::MIN);
    }

    #[test]
    fn display_in_range() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let t = Timestamp::from_datetime(dt);
        assert_eq!(t.to_string(), "2024-03-15 10:30:00");
    }

    #[test]
    fn display_out_of_range_falls_back_to_seconds() {
        let t = Timestamp::from_seconds(i64::MAX);
        assert_eq!(t.to_string(), format!("{}s", i64::MAX));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let t = Timestamp::from_seconds(42);
        assert_eq!(serde_json::to_string(&t).unwrap(), "42");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Adding then subtracting the same duration returns the original.
        #[test]
        fn add_sub_identity(seconds in -1_000_000_000i64..1_000_000_000, offset in 0i64..1_000_000) {
            let t = Timestamp::from_seconds(seconds);
            let dur = Duration::seconds(offset);
            prop_assert_eq!(t + dur - dur, t);
        }

        /// Ordering agrees with the raw second counts.
        #[test]
        fn ordering_matches_seconds(a in any::<i64>(), b in any::<i64>()) {
            let ta = Timestamp::from_seconds(a);
            let tb = Timestamp::from_seconds(b);
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        /// Duration between timestamps is consistent with ordering.
        #[test]
        fn duration_ordering_consistent(
            a in -1_000_000_000i64..1_000_000_000,
            b in -1_000_000_000i64..1_000_000_000,
        ) {
            let ta = Timestamp::from_seconds(a);
            let tb = Timestamp::from_seconds(b);
            let dur = tb.signed_duration_since(ta);

            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => prop_assert!(dur > Duration::zero()),
                std::cmp::Ordering::Greater => prop_assert!(dur < Duration::zero()),
                std::cmp::Ordering::Equal => prop_assert!(dur == Duration::zero()),
            }
        }
    }
}
