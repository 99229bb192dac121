//! Filter composition and evaluation.
//!
//! The filter model has three layers: [`Operator`] (pure comparison
//! kinds), [`ConditionSet`] (insertion-ordered operator/threshold maps,
//! one per dimension), and [`Filter`] (the four-stage evaluation engine).
//! [`FilterBuilder`] assembles a validated `Filter` from a fluent call
//! sequence.

mod builder;
mod condition;
mod engine;
mod operator;

pub use builder::{BuildError, Dimension, FilterBuilder, Threshold};
pub use condition::ConditionSet;
pub use engine::{EvaluationMode, ExecutionMode, Filter};
pub use operator::Operator;
