//! Comparison operators for filter conditions.

use serde::Serialize;
use std::fmt;

/// A comparison kind applied between an observed value and a threshold.
///
/// The set is closed: equality plus the four strict/inclusive orderings.
///
/// # Examples
///
/// ```
/// use itinerary_filter::filter::Operator;
///
/// assert!(Operator::Gte.apply(5, 5));
/// assert!(Operator::Lt.apply(4, 5));
/// assert!(!Operator::Gt.apply(5, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `lhs == rhs`
    Eq,
    /// `lhs > rhs`
    Gt,
    /// `lhs >= rhs`
    Gte,
    /// `lhs < rhs`
    Lt,
    /// `lhs <= rhs`
    Lte,
}

impl Operator {
    /// Evaluates `lhs OP rhs`.
    pub fn apply<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Gt => lhs > rhs,
            Operator::Gte => lhs >= rhs,
            Operator::Lt => lhs < rhs,
            Operator::Lte => lhs <= rhs,
        }
    }

    /// The mathematical symbol, for logs and error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// GTE is exactly GT-or-EQ; LTE is exactly LT-or-EQ.
        #[test]
        fn inclusive_is_union_of_strict_and_eq(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(
                Operator::Gte.apply(a, b),
                Operator::Gt.apply(a, b) || Operator::Eq.apply(a, b)
            );
            prop_assert_eq!(
                Operator::Lte.apply(a, b),
                Operator::Lt.apply(a, b) || Operator::Eq.apply(a, b)
            );
        }

        /// GT and LTE are complementary on a total order, as are LT and GTE.
        #[test]
        fn strict_complements_inclusive(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_ne!(Operator::Gt.apply(a, b), Operator::Lte.apply(a, b));
            prop_assert_ne!(Operator::Lt.apply(a, b), Operator::Gte.apply(a, b));
        }
    }
}
