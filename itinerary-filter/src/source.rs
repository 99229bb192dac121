//! Itinerary data sources.
//!
//! The engine treats its input as a one-shot, fully materialized snapshot
//! with no freshness or paging contract. Sources are injected explicitly
//! wherever filter input is assembled; there is no process-wide registry.

use chrono::Duration;

use crate::domain::{Itinerary, Leg, Timestamp};

/// Supplies a fully materialized itinerary collection.
pub trait ItinerarySource {
    /// Returns every itinerary, in the source's canonical order.
    fn get_all(&self) -> Vec<Itinerary>;
}

/// The canned six-itinerary demonstration set, anchored at a base instant.
///
/// Relative to `base` the set contains, in order:
///
/// 0. a normal one-leg itinerary of two hours
/// 1. a normal two-leg itinerary
/// 2. an itinerary departing six days in the past
/// 3. an itinerary whose single leg arrives before it departs
/// 4. a two-leg itinerary with a three-hour ground gap
/// 5. a three-leg itinerary with one-hour and two-hour ground gaps
#[derive(Debug, Clone)]
pub struct SampleItineraries {
    base: Timestamp,
}

impl SampleItineraries {
    /// Anchors the sample set at an explicit base instant. Tests use a
    /// fixed base for deterministic expectations.
    pub fn new(base: Timestamp) -> Self {
        Self { base }
    }

    /// Returns the base instant.
    pub fn base(&self) -> Timestamp {
        self.base
    }
}

impl Default for SampleItineraries {
    /// Anchors the set three days from now, matching the demo binary.
    fn default() -> Self {
        Self::new(Timestamp::now() + Duration::days(3))
    }
}

impl ItinerarySource for SampleItineraries {
    fn get_all(&self) -> Vec<Itinerary> {
        let base = self.base;
        let hours = Duration::hours;

        let itinerary = |legs: Vec<Leg>| Itinerary::new(legs).expect("sample legs are non-empty");

        vec![
            itinerary(vec![Leg::new(base, base + hours(2))]),
            itinerary(vec![
                Leg::new(base, base + hours(2)),
                Leg::new(base + hours(3), base + hours(5)),
            ]),
            itinerary(vec![Leg::new(base - Duration::days(6), base)]),
            itinerary(vec![Leg::new(base, base - hours(6))]),
            itinerary(vec![
                Leg::new(base, base + hours(2)),
                Leg::new(base + hours(5), base + hours(6)),
            ]),
            itinerary(vec![
                Leg::new(base, base + hours(2)),
                Leg::new(base + hours(3), base + hours(4)),
                Leg::new(base + hours(6), base + hours(7)),
            ]),
        ]
    }
}
