//! Domain types for itinerary filtering.
//!
//! This module contains the core data model: timestamps, legs and
//! itineraries. Itineraries enforce non-emptiness at construction time,
//! so code that receives one can rely on at least one leg being present.

mod error;
mod itinerary;
mod leg;
mod time;

pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use time::Timestamp;
