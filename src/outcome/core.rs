use std::fmt;
use std::hash::Hash;

use crate::domain::DomainEvent;
use super::errors::ContractViolation;
use super::ordered_set::OrderedSet;

// ============================================================================
// Outcome - Result of a Business Operation
// ============================================================================
//
// Key Principles:
// 1. A success carries an optional value and the events it emitted
// 2. A failure carries only error messages (possibly none)
// 3. The two never mix: the variants have no field for the other side
// 4. Built once by a factory, never mutated; map returns a new Outcome
//
// ============================================================================

/// Result of a business operation.
///
/// `T` is the returned value (`()` when there is none) and `E` the domain
/// event type emitted by a success.
///
/// ```
/// use domain_outcome::{DomainEvent, Outcome};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum CartEvent { ItemAdded(u32) }
/// impl DomainEvent for CartEvent {}
///
/// let added = Outcome::success(2_u32, [CartEvent::ItemAdded(7)]);
/// let total = added.map(|count| count * 10);
/// assert_eq!(total.value(), Some(&20));
/// assert_eq!(total.events(), &[CartEvent::ItemAdded(7)]);
///
/// let rejected = Outcome::<u32, CartEvent>::failure(["cart is closed"]);
/// assert!(rejected.is_failure());
/// ```
#[derive(Debug, Clone, Hash)]
pub enum Outcome<T, E> {
    Success {
        value: Option<T>,
        events: OrderedSet<E>,
    },
    Failure {
        errors: OrderedSet<String>,
    },
}

// ============================================================================
// Factories
// ============================================================================

impl<T, E: DomainEvent> Outcome<T, E> {
    /// Successful result with a value and the events it emitted.
    ///
    /// Duplicate events are collapsed; the first occurrence keeps its place.
    pub fn success<I>(value: T, events: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Success {
            value: Some(value),
            events: events.into_iter().collect(),
        }
    }

    /// Successful result with a value and no events
    pub fn success_value(value: T) -> Self {
        Self::Success {
            value: Some(value),
            events: OrderedSet::new(),
        }
    }

    /// Failed result.
    ///
    /// Passing no messages is allowed; the result is still a failure, with
    /// empty [`errors`](Self::errors). Duplicate messages are removed.
    pub fn failure<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Failure {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Failed result with a single message
    pub fn failure_message(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::failure([message])
    }

    /// Checked variant of [`success`](Self::success) for inputs that may be
    /// missing.
    ///
    /// Checks run in order: value, then the event container, then every
    /// event. The first missing input is reported and no Outcome is built.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::MissingValue`], [`ContractViolation::MissingEvents`]
    /// or [`ContractViolation::MissingEvent`].
    pub fn try_success<I>(value: Option<T>, events: Option<I>) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let value = value.ok_or(ContractViolation::MissingValue).inspect_err(log_violation)?;
        let events = require_events(events)?;

        Ok(Self::success(value, events))
    }

    /// Checked variant of [`failure`](Self::failure).
    ///
    /// # Errors
    ///
    /// [`ContractViolation::MissingErrors`] when the container is absent,
    /// [`ContractViolation::MissingError`] for the first absent message.
    pub fn try_failure<I, S>(errors: Option<I>) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let errors = require_elements(
            errors,
            ContractViolation::MissingErrors,
            |index| ContractViolation::MissingError { index },
        )?;

        Ok(Self::failure(errors))
    }
}

impl<E: DomainEvent> Outcome<(), E> {
    /// Successful result without a value, carrying the given events
    pub fn success_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Success {
            value: None,
            events: events.into_iter().collect(),
        }
    }

    /// Successful result without a value and without events
    pub fn success_unit() -> Self {
        Self::Success {
            value: None,
            events: OrderedSet::new(),
        }
    }

    /// Checked variant of [`success_events`](Self::success_events).
    ///
    /// # Errors
    ///
    /// [`ContractViolation::MissingEvents`] or [`ContractViolation::MissingEvent`].
    pub fn try_success_events<I>(events: Option<I>) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        Ok(Self::success_events(require_events(events)?))
    }
}

fn require_events<I, E>(events: Option<I>) -> Result<Vec<E>, ContractViolation>
where
    I: IntoIterator<Item = Option<E>>,
{
    require_elements(
        events,
        ContractViolation::MissingEvents,
        |index| ContractViolation::MissingEvent { index },
    )
}

/// Container first, then each element; nothing is deduplicated until every
/// element has been checked.
fn require_elements<I, X>(
    items: Option<I>,
    missing: ContractViolation,
    missing_at: fn(usize) -> ContractViolation,
) -> Result<Vec<X>, ContractViolation>
where
    I: IntoIterator<Item = Option<X>>,
{
    items
        .ok_or(missing)
        .and_then(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| item.ok_or_else(|| missing_at(index)))
                .collect()
        })
        .inspect_err(log_violation)
}

fn log_violation(violation: &ContractViolation) {
    tracing::debug!(%violation, "Rejected outcome construction");
}

// ============================================================================
// Accessors
// ============================================================================

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, present only on a success that carries one
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => value.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Events emitted by a success, in first-seen order. Always empty for a
    /// failure.
    pub fn events(&self) -> &[E] {
        match self {
            Self::Success { events, .. } => events.as_slice(),
            Self::Failure { .. } => &[],
        }
    }

    /// Error messages of a failure, in first-seen order. Always empty for a
    /// success.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors.as_slice(),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { .. } => None,
        }
    }

    pub fn into_events(self) -> OrderedSet<E> {
        match self {
            Self::Success { events, .. } => events,
            Self::Failure { .. } => OrderedSet::new(),
        }
    }

    pub fn into_errors(self) -> OrderedSet<String> {
        match self {
            Self::Success { .. } => OrderedSet::new(),
            Self::Failure { errors } => errors,
        }
    }

    /// Convert into a std `Result` so callers at the edge of the business
    /// layer can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the error messages when the outcome is a failure.
    pub fn into_result(self) -> Result<(Option<T>, OrderedSet<E>), OrderedSet<String>> {
        match self {
            Self::Success { value, events } => Ok((value, events)),
            Self::Failure { errors } => Err(errors),
        }
    }

    // ========================================================================
    // Transformation
    // ========================================================================

    /// Transform the value, keeping the events.
    ///
    /// The transform runs exactly once, and only for a success that carries
    /// a value. A failure keeps its messages and a valueless success keeps
    /// its events; neither calls `transform`. A panic inside `transform` is
    /// not caught.
    pub fn map<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success { value: Some(value), events } => Outcome::Success {
                value: Some(transform(value)),
                events,
            },
            Self::Success { value: None, events } => {
                tracing::trace!(events = events.len(), "map skipped: success without value");
                Outcome::Success { value: None, events }
            }
            Self::Failure { errors } => {
                tracing::trace!(errors = errors.len(), "map skipped: failure");
                Outcome::Failure { errors }
            }
        }
    }
}

// Set fields compare as sets, which needs `Eq + Hash` on the events, so
// equality is written out instead of derived.
impl<T: PartialEq, E: Eq + Hash> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Success { value, events },
                Self::Success { value: other_value, events: other_events },
            ) => value == other_value && events == other_events,
            (Self::Failure { errors }, Self::Failure { errors: other_errors }) => {
                errors == other_errors
            }
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq + Hash> Eq for Outcome<T, E> {}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcome{{success={}, value={:?}, events=", self.is_success(), self.value())?;
        f.debug_set().entries(self.events()).finish()?;
        f.write_str(", errors=")?;
        f.debug_set().entries(self.errors()).finish()?;
        f.write_str("}")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
