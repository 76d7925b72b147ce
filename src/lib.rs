//! Immutable results for business operations.
//!
//! An [`Outcome`] is either a success, carrying an optional value and the
//! [`DomainEvent`]s it emitted, or a failure, carrying zero or more error
//! messages. Fallible operations return one instead of panicking.

pub mod domain;
pub mod outcome;

pub use domain::DomainEvent;
pub use outcome::{ContractViolation, OrderedSet, Outcome};
