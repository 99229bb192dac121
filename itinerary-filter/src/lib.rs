//! Multi-leg flight itinerary filtering.
//!
//! Filters an in-memory itinerary collection against time-based
//! predicates (arrival, departure, ground-idle duration) and an optional
//! validity constraint. Conditions are assembled through a fluent
//! [`FilterBuilder`](filter::FilterBuilder) and applied by an immutable
//! [`Filter`](filter::Filter) as a fixed four-stage narrowing pipeline.

pub mod domain;
pub mod filter;
pub mod report;
pub mod source;
