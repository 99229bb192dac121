//! Flight leg type.
//!
//! A `Leg` is one flight segment with a recorded departure and arrival
//! time. The raw data may contain entry inversions where the arrival was
//! recorded before the departure; such legs are kept as-is and flagged by
//! [`Leg::is_invalid`] rather than rejected at construction, because the
//! filter engine decides per evaluation whether they participate.

use serde::Serialize;
use std::fmt;

use super::Timestamp;

/// One flight segment: departure and arrival instants.
///
/// A leg is *temporally coherent* iff `departure <= arrival`; otherwise it
/// is *invalid* (a data-entry inversion). No other invariant is enforced
/// on raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Leg {
    departure: Timestamp,
    arrival: Timestamp,
}

impl Leg {
    /// Creates a leg from recorded times. Inverted times are accepted;
    /// see [`Leg::is_invalid`].
    pub fn new(departure: Timestamp, arrival: Timestamp) -> Self {
        Self { departure, arrival }
    }

    /// Returns the departure time.
    pub fn departure(&self) -> Timestamp {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> Timestamp {
        self.arrival
    }

    /// True iff the recorded departure is after the recorded arrival.
    pub fn is_invalid(&self) -> bool {
        self.departure > self.arrival
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.departure, self.arrival)
    }
}
