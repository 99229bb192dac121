//! Fluent filter construction.
//!
//! A [`FilterBuilder`] accumulates conditions through a sequence of
//! dimension-selection calls (`arrival`, `departure`, `idle`) and
//! comparison calls (`eq`, `gt`, `gte`, `lt`, `lte`), then validates the
//! configuration at [`build`](FilterBuilder::build). Comparison calls
//! target whichever dimension was selected last; calling one before any
//! selection is a caller bug surfaced as [`BuildError::NoDimensionSelected`].

use chrono::Duration;
use std::fmt;

use crate::domain::Timestamp;

use super::engine::{ExecutionMode, Filter};
use super::{ConditionSet, Operator};

/// The dimension a comparison call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Leg arrival time.
    Arrival,
    /// Leg departure time.
    Departure,
    /// Ground-idle duration between consecutive legs.
    Idle,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Arrival => "arrival",
            Dimension::Departure => "departure",
            Dimension::Idle => "idle",
        })
    }
}

/// A comparison threshold: an instant for the time dimensions, a duration
/// for the idle dimension.
///
/// Comparison methods take `impl Into<Threshold>`, so call sites pass a
/// [`Timestamp`] or a [`chrono::Duration`] directly and the builder checks
/// the kind against the selected dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// An instant, for the arrival and departure dimensions.
    Time(Timestamp),
    /// A gap length, for the idle dimension.
    Idle(Duration),
}

impl Threshold {
    fn kind(&self) -> &'static str {
        match self {
            Threshold::Time(_) => "time",
            Threshold::Idle(_) => "idle-duration",
        }
    }
}

impl From<Timestamp> for Threshold {
    fn from(timestamp: Timestamp) -> Self {
        Threshold::Time(timestamp)
    }
}

impl From<Duration> for Threshold {
    fn from(duration: Duration) -> Self {
        Threshold::Idle(duration)
    }
}

/// Errors surfaced while configuring or building a filter.
///
/// Both kinds are caller bugs, not transient conditions: the call chain
/// must be restarted with a corrected configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// Comparison call before any dimension selection
    #[error(
        "no target dimension selected: call arrival(), departure() or idle() before a comparison"
    )]
    NoDimensionSelected,

    /// Threshold kind does not fit the selected dimension
    #[error("a {kind} threshold cannot target the {dimension} dimension")]
    ThresholdMismatch {
        /// The dimension selected when the comparison was attempted.
        dimension: Dimension,
        /// The kind of threshold that was passed.
        kind: &'static str,
    },

    /// `build()` on a configuration that would filter nothing
    #[error(
        "filter would match everything: add a condition or call remove_invalid_itineraries()"
    )]
    EmptyConfiguration,
}

/// Mutable accumulator for filter configuration.
///
/// Single-use per configuration session, though `build` borrows rather
/// than consumes: condition sets are cloned into the [`Filter`], so
/// mutating the builder afterwards never affects filters already built.
///
/// # Examples
///
/// ```
/// use itinerary_filter::filter::FilterBuilder;
/// use itinerary_filter::domain::Timestamp;
/// use chrono::Duration;
///
/// let filter = FilterBuilder::new()
///     .departure()
///     .lt(Timestamp::from_seconds(1_700_000_000))?
///     .idle()
///     .gt(Duration::hours(2))?
///     .remove_invalid_itineraries()
///     .build()?;
/// # Ok::<(), itinerary_filter::filter::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    arrival: ConditionSet<Timestamp>,
    departure: ConditionSet<Timestamp>,
    idle: ConditionSet<Duration>,
    selected: Option<Dimension>,
    allow_invalid: bool,
    execution: ExecutionMode,
}

impl FilterBuilder {
    /// Creates a builder with no conditions, no selected dimension, and
    /// invalid itineraries allowed.
    pub fn new() -> Self {
        Self {
            arrival: ConditionSet::new(),
            departure: ConditionSet::new(),
            idle: ConditionSet::new(),
            selected: None,
            allow_invalid: true,
            execution: ExecutionMode::Sequential,
        }
    }

    /// Targets subsequent comparison calls at the arrival dimension.
    pub fn arrival(mut self) -> Self {
        self.selected = Some(Dimension::Arrival);
        self
    }

    /// Targets subsequent comparison calls at the departure dimension.
    pub fn departure(mut self) -> Self {
        self.selected = Some(Dimension::Departure);
        self
    }

    /// Targets subsequent comparison calls at the idle dimension.
    pub fn idle(mut self) -> Self {
        self.selected = Some(Dimension::Idle);
        self
    }

    /// Adds an equality condition on the selected dimension.
    pub fn eq(self, threshold: impl Into<Threshold>) -> Result<Self, BuildError> {
        self.compare(Operator::Eq, threshold.into())
    }

    /// Adds a strictly-greater condition on the selected dimension.
    pub fn gt(self, threshold: impl Into<Threshold>) -> Result<Self, BuildError> {
        self.compare(Operator::Gt, threshold.into())
    }

    /// Adds a greater-or-equal condition on the selected dimension.
    pub fn gte(self, threshold: impl Into<Threshold>) -> Result<Self, BuildError> {
        self.compare(Operator::Gte, threshold.into())
    }

    /// Adds a strictly-less condition on the selected dimension.
    pub fn lt(self, threshold: impl Into<Threshold>) -> Result<Self, BuildError> {
        self.compare(Operator::Lt, threshold.into())
    }

    /// Adds a less-or-equal condition on the selected dimension.
    pub fn lte(self, threshold: impl Into<Threshold>) -> Result<Self, BuildError> {
        self.compare(Operator::Lte, threshold.into())
    }

    /// Excludes itineraries containing a leg whose departure is recorded
    /// after its arrival.
    pub fn remove_invalid_itineraries(mut self) -> Self {
        self.allow_invalid = false;
        self
    }

    /// Hints that evaluation should fan out across itineraries. Advisory
    /// only; results are identical either way.
    pub fn parallel(mut self) -> Self {
        self.execution = ExecutionMode::Parallel;
        self
    }

    /// Hints that evaluation should run on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.execution = ExecutionMode::Sequential;
        self
    }

    fn compare(mut self, operator: Operator, threshold: Threshold) -> Result<Self, BuildError> {
        let dimension = self.selected.ok_or(BuildError::NoDimensionSelected)?;
        match (dimension, threshold) {
            (Dimension::Arrival, Threshold::Time(t)) => self.arrival.insert(operator, t),
            (Dimension::Departure, Threshold::Time(t)) => self.departure.insert(operator, t),
            (Dimension::Idle, Threshold::Idle(gap)) => self.idle.insert(operator, gap),
            (dimension, threshold) => {
                return Err(BuildError::ThresholdMismatch {
                    dimension,
                    kind: threshold.kind(),
                });
            }
        }
        Ok(self)
    }

    /// Produces an immutable [`Filter`] from the accumulated conditions.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyConfiguration`] when all three condition
    /// sets are empty and invalid itineraries are still allowed; such a
    /// filter would pass every itinerary through. The only valid
    /// no-time-condition configuration is a pure validity filter built
    /// after [`remove_invalid_itineraries`](Self::remove_invalid_itineraries).
    pub fn build(&self) -> Result<Filter, BuildError> {
        if self.allow_invalid
            && self.arrival.is_empty()
            && self.departure.is_empty()
            && self.idle.is_empty()
        {
            return Err(BuildError::EmptyConfiguration);
        }
        Ok(Filter::new(
            self.arrival.clone(),
            self.departure.clone(),
            self.idle.clone(),
            self.allow_invalid,
            self.execution,
        ))
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
