//! Filter evaluation engine.
//!
//! A [`Filter`] applies a fixed four-stage narrowing pipeline to an
//! itinerary collection: arrival conditions, departure conditions, idle
//! conditions, then the validity stage. Each stage only removes
//! itineraries (or, in projection mode, shrinks them); nothing is ever
//! added back, and output order is input order restricted to survivors.
//!
//! Evaluation is a pure function of the input and the filter's
//! configuration. There is deliberately no per-call mutable state: the
//! validity policy is re-derived from `allow_invalid` at every use, so a
//! later stage can never see a "validity already enforced" shortcut.

use chrono::Duration;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{Itinerary, Leg, Timestamp};

use super::ConditionSet;
use super::Operator;

/// Whether per-stage filtering fans out across itineraries.
///
/// Purely a performance hint: both modes return the same itineraries in
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Plain iterator pass over the collection.
    #[default]
    Sequential,
    /// Data-parallel pass via rayon. Each worker reads one itinerary and
    /// produces an independent verdict; results are collected in input
    /// order.
    Parallel,
}

/// Shape of the evaluation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// Surviving itineraries are returned whole.
    #[default]
    WholeItineraries,
    /// During the arrival and departure stages, each survivor is replaced
    /// by a new itinerary containing only the legs that matched the
    /// current operator.
    MatchingLegsOnly,
}

/// Which leg time a time-condition stage compares.
#[derive(Debug, Clone, Copy)]
enum TimeField {
    Arrival,
    Departure,
}

impl TimeField {
    fn of(self, leg: &Leg) -> Timestamp {
        match self {
            TimeField::Arrival => leg.arrival(),
            TimeField::Departure => leg.departure(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            TimeField::Arrival => "arrival",
            TimeField::Departure => "departure",
        }
    }
}

/// An immutable, reusable itinerary filter.
///
/// Built by [`FilterBuilder`](super::FilterBuilder). Holds one condition
/// set per dimension plus the validity toggle; evaluation never mutates
/// the filter, so one instance can be shared across threads and reused
/// across calls.
#[derive(Debug, Clone)]
pub struct Filter {
    arrival: ConditionSet<Timestamp>,
    departure: ConditionSet<Timestamp>,
    idle: ConditionSet<Duration>,
    allow_invalid: bool,
    execution: ExecutionMode,
}

impl Filter {
    pub(crate) fn new(
        arrival: ConditionSet<Timestamp>,
        departure: ConditionSet<Timestamp>,
        idle: ConditionSet<Duration>,
        allow_invalid: bool,
        execution: ExecutionMode,
    ) -> Self {
        Self {
            arrival,
            departure,
            idle,
            allow_invalid,
            execution,
        }
    }

    /// Returns the execution-mode hint this filter was built with.
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution
    }

    /// Evaluates the filter, returning surviving itineraries whole.
    ///
    /// Total over any well-formed collection: empty input yields empty
    /// output, and no itinerary shape causes a failure.
    pub fn evaluate(&self, itineraries: &[Itinerary]) -> Vec<Itinerary> {
        self.evaluate_with(itineraries, EvaluationMode::WholeItineraries)
    }

    /// Evaluates the filter with an explicit output shape.
    pub fn evaluate_with(
        &self,
        itineraries: &[Itinerary],
        mode: EvaluationMode,
    ) -> Vec<Itinerary> {
        debug!(
            arrival_conditions = self.arrival.len(),
            departure_conditions = self.departure.len(),
            idle_conditions = self.idle.len(),
            allow_invalid = self.allow_invalid,
            input = itineraries.len(),
            "evaluating filter"
        );

        let mut working: Vec<Itinerary> = itineraries.to_vec();

        if !self.arrival.is_empty() {
            working = self.time_stage(working, &self.arrival, TimeField::Arrival, mode);
        }
        if !self.departure.is_empty() {
            working = self.time_stage(working, &self.departure, TimeField::Departure, mode);
        }
        if !self.idle.is_empty() {
            working = self.idle_stage(working);
        }

        // Pure validity mode, or an explicit remove-invalid request on top
        // of time conditions. The leg-level checks in earlier stages do not
        // replace this pass: an itinerary can match on its coherent legs
        // while still carrying an invalid one.
        let no_conditions =
            self.arrival.is_empty() && self.departure.is_empty() && self.idle.is_empty();
        if no_conditions || !self.allow_invalid {
            working = self.validity_stage(working);
        }

        working
    }

    /// Applies every condition of one time dimension, in insertion order.
    ///
    /// Per operator, an itinerary survives when at least one of its legs
    /// is eligible under the validity policy and satisfies
    /// `time OP threshold`. Operators AND together, but the qualifying leg
    /// may differ per operator.
    fn time_stage(
        &self,
        mut working: Vec<Itinerary>,
        conditions: &ConditionSet<Timestamp>,
        field: TimeField,
        mode: EvaluationMode,
    ) -> Vec<Itinerary> {
        for (operator, threshold) in conditions.iter() {
            let threshold = *threshold;
            let before = working.len();

            working = match mode {
                EvaluationMode::WholeItineraries => self.narrow(working, |itinerary| {
                    itinerary
                        .legs()
                        .iter()
                        .any(|leg| self.leg_matches(leg, field, operator, threshold))
                }),
                EvaluationMode::MatchingLegsOnly => self.narrow_map(working, |itinerary| {
                    let matching: Vec<Leg> = itinerary
                        .legs()
                        .iter()
                        .filter(|leg| self.leg_matches(leg, field, operator, threshold))
                        .copied()
                        .collect();
                    if matching.is_empty() {
                        None
                    } else {
                        // Non-empty checked just above.
                        Some(Itinerary::new(matching).unwrap())
                    }
                }),
            };

            debug!(
                stage = field.name(),
                operator = %operator,
                before,
                after = working.len(),
                "time stage narrowed collection"
            );
        }
        working
    }

    /// Applies every idle-duration condition, in insertion order.
    ///
    /// An itinerary survives an operator when at least one gap between
    /// consecutive legs satisfies `idle OP threshold` and the itinerary as
    /// a whole passes the validity policy. Itineraries with fewer than two
    /// legs have no gaps and never survive this stage.
    fn idle_stage(&self, mut working: Vec<Itinerary>) -> Vec<Itinerary> {
        for (operator, threshold) in self.idle.iter() {
            let threshold = *threshold;
            let before = working.len();

            working = self.narrow(working, |itinerary| {
                itinerary
                    .idle_periods()
                    .any(|gap| operator.apply(gap, threshold))
                    && self.itinerary_passes_validity_policy(itinerary)
            });

            debug!(
                stage = "idle",
                operator = %operator,
                before,
                after = working.len(),
                "idle stage narrowed collection"
            );
        }
        working
    }

    /// Keeps only itineraries with no invalid leg.
    fn validity_stage(&self, working: Vec<Itinerary>) -> Vec<Itinerary> {
        let before = working.len();
        let kept = self.narrow(working, |itinerary| !itinerary.has_invalid_leg());
        debug!(
            stage = "validity",
            before,
            after = kept.len(),
            "validity stage narrowed collection"
        );
        kept
    }

    /// Leg eligibility under the validity policy, evaluated fresh at every
    /// call site: when invalid itineraries are disallowed, an inverted leg
    /// never matches a condition regardless of operator outcome.
    fn leg_eligible(&self, leg: &Leg) -> bool {
        self.allow_invalid || !leg.is_invalid()
    }

    fn leg_matches(
        &self,
        leg: &Leg,
        field: TimeField,
        operator: Operator,
        threshold: Timestamp,
    ) -> bool {
        self.leg_eligible(leg) && operator.apply(field.of(leg), threshold)
    }

    /// Itinerary-level validity policy: when invalid itineraries are
    /// disallowed, an itinerary passes only if none of its legs is
    /// inverted.
    fn itinerary_passes_validity_policy(&self, itinerary: &Itinerary) -> bool {
        self.allow_invalid || !itinerary.has_invalid_leg()
    }

    /// One narrowing pass, sequential or rayon fan-out depending on the
    /// execution hint. Both preserve input order.
    fn narrow<F>(&self, input: Vec<Itinerary>, keep: F) -> Vec<Itinerary>
    where
        F: Fn(&Itinerary) -> bool + Sync,
    {
        match self.execution {
            ExecutionMode::Sequential => input.into_iter().filter(|it| keep(it)).collect(),
            ExecutionMode::Parallel => input.into_par_iter().filter(|it| keep(it)).collect(),
        }
    }

    /// Narrowing pass that may also reshape survivors (projection mode).
    fn narrow_map<F>(&self, input: Vec<Itinerary>, map: F) -> Vec<Itinerary>
    where
        F: Fn(&Itinerary) -> Option<Itinerary> + Sync,
    {
        match self.execution {
            ExecutionMode::Sequential => input.iter().filter_map(|it| map(it)).collect(),
            ExecutionMode::Parallel => input.par_iter().filter_map(|it| map(it)).collect(),
        }
    }
}
