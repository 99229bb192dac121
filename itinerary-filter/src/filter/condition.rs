//! Per-dimension condition sets.

use super::Operator;

/// An insertion-ordered mapping from [`Operator`] to a threshold.
///
/// At most one entry per operator: inserting an operator that is already
/// present replaces its threshold in place, keeping the original position.
/// Iteration order is insertion order, which is the order the engine
/// applies conjunctive narrowing in. With five possible keys a `Vec` beats
/// any map here.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSet<T> {
    entries: Vec<(Operator, T)>,
}

impl<T> ConditionSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts `{operator: threshold}`, overwriting the threshold if the
    /// operator is already present.
    pub fn insert(&mut self, operator: Operator, threshold: T) {
        if let Some(entry) = self.entries.iter_mut().find(|(op, _)| *op == operator) {
            entry.1 = threshold;
        } else {
            self.entries.push((operator, threshold));
        }
    }

    /// True when no condition has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Operator, &T)> {
        self.entries.iter().map(|(op, threshold)| (*op, threshold))
    }
}

impl<T> Default for ConditionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
