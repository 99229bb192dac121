//! Domain error types.
//!
//! Validation failures in the domain layer, distinct from filter
//! configuration errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary constructed with no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,
}
