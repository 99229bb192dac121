//! Itinerary type.
//!
//! An `Itinerary` is an ordered, non-empty sequence of legs representing
//! one multi-stop journey. Legs are kept in the chronological order the
//! data source provided and are never reordered.

use chrono::Duration;
use serde::Serialize;
use std::fmt;

use super::{DomainError, Leg};

/// An ordered sequence of one or more legs.
///
/// Non-emptiness is enforced at construction, so consumers can rely on at
/// least one leg being present. Itineraries are immutable values; the
/// filter engine only includes or excludes them (or builds new ones in
/// projection mode).
///
/// # Examples
///
/// ```
/// use itinerary_filter::domain::{Itinerary, Leg, Timestamp};
///
/// let leg = Leg::new(Timestamp::from_seconds(0), Timestamp::from_seconds(3600));
/// let itinerary = Itinerary::new(vec![leg]).unwrap();
/// assert_eq!(itinerary.leg_count(), 1);
///
/// assert!(Itinerary::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Constructs an itinerary, rejecting an empty leg sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyItinerary`] when `legs` is empty.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { legs })
    }

    /// Returns the legs in chronological flight order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// True iff any leg has its departure recorded after its arrival.
    pub fn has_invalid_leg(&self) -> bool {
        self.legs.iter().any(Leg::is_invalid)
    }

    /// Ground-idle gaps between chronologically consecutive legs.
    ///
    /// Yields `legs[i + 1].departure - legs[i].arrival` for each
    /// consecutive pair, so a single-leg itinerary yields nothing. Gaps
    /// can be negative when the data records an overlap, and saturate at
    /// chrono's representable range for extreme timestamps.
    pub fn idle_periods(&self) -> impl Iterator<Item = Duration> + '_ {
        self.legs
            .windows(2)
            .map(|pair| pair[1].departure().signed_duration_since(pair[0].arrival()))
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    fn leg(dep: i64, arr: i64) -> Leg {
        Leg::new(Timestamp::from_seconds(dep), Timestamp::from_seconds(arr))
    }

    #[test]
    fn rejects_empty_leg_sequence() {
        assert!(matches!(
            Itinerary::new(vec![]),
            Err(DomainError::EmptyItinerary)
        ));
    }

    #[test]
    fn preserves_leg_order() {
        let itinerary = Itinerary::new(vec![leg(0, 100), leg(200, 300), leg(50, 60)]).unwrap();

        let departures: Vec<i64> = itinerary
            .legs()
            .iter()
            .map(|l| l.departure().seconds())
            .collect();
        assert_eq!(departures, vec![0, 200, 50]);
    }

    #[test]
    fn invalid_leg_detection() {
        let clean = Itinerary::new(vec![leg(0, 100), leg(200, 300)]).unwrap();
        assert!(!clean.has_invalid_leg());

        let tainted = Itinerary::new(vec![leg(0, 100), leg(300, 200)]).unwrap();
        assert!(tainted.has_invalid_leg());
    }

    #[test]
    fn idle_periods_between_consecutive_legs() {
        let itinerary =
            Itinerary::new(vec![leg(0, 100), leg(400, 500), leg(500, 600)]).unwrap();

        let gaps: Vec<i64> = itinerary.idle_periods().map(|d| d.num_seconds()).collect();
        assert_eq!(gaps, vec![300, 0]);
    }

    #[test]
    fn idle_periods_empty_for_single_leg() {
        let itinerary = Itinerary::new(vec![leg(0, 100)]).unwrap();
        assert_eq!(itinerary.idle_periods().count(), 0);
    }

    #[test]
    fn idle_period_negative_on_overlap() {
        // Next leg departs before the previous one lands.
        let itinerary = Itinerary::new(vec![leg(0, 500), leg(400, 900)]).unwrap();
        let gaps: Vec<i64> = itinerary.idle_periods().map(|d| d.num_seconds()).collect();
        assert_eq!(gaps, vec![-100]);
    }

    #[test]
    fn display_joins_legs_in_order() {
        let itinerary = Itinerary::new(vec![leg(0, 1), leg(2, 3)]).unwrap();
        let rendered = itinerary.to_string();

        let first = itinerary.legs()[0].to_string();
        let second = itinerary.legs()[1].to_string();
        assert_eq!(rendered, format!("{first} {second}"));
    }
}
