// ============================================================================
// Outcome - Success/Failure Results for Business Operations
// ============================================================================
//
// This module contains the Outcome value type and its building blocks:
// - OrderedSet (insertion-ordered, duplicate-free collection)
// - ContractViolation (construction-time faults)
// - Outcome (factories, accessors, map)
//
// ============================================================================

mod core;
mod errors;
mod ordered_set;

pub use self::core::Outcome;
pub use errors::ContractViolation;
pub use ordered_set::OrderedSet;
