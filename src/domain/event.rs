use std::fmt::Debug;
use std::hash::Hash;

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Marker for anything notable that happened during a successful operation.
///
/// An [`Outcome`](crate::Outcome) stores events verbatim and never inspects
/// them. The only things it relies on are the implementor's own `Eq` and
/// `Hash`, which decide when two events are duplicates.
///
/// Aggregates usually implement this on a single event enum:
///
/// ```
/// use domain_outcome::DomainEvent;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AccountEvent {
///     Opened { owner: String },
///     Closed,
/// }
///
/// impl DomainEvent for AccountEvent {}
/// ```
pub trait DomainEvent: Debug + Eq + Hash {}

impl<E: DomainEvent + ?Sized> DomainEvent for Box<E> {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct TestEvent {
        data: String,
    }

    impl DomainEvent for TestEvent {}

    fn duplicates<E: DomainEvent>(left: &E, right: &E) -> bool {
        left == right
    }

    #[test]
    fn test_equality_is_owned_by_the_event_type() {
        let first = TestEvent { data: "test".to_string() };
        let same = TestEvent { data: "test".to_string() };
        let other = TestEvent { data: "other".to_string() };

        assert!(duplicates(&first, &same));
        assert!(!duplicates(&first, &other));
    }

    #[test]
    fn test_boxed_events_are_events() {
        let boxed = Box::new(TestEvent { data: "boxed".to_string() });
        assert!(duplicates(&boxed, &Box::new(TestEvent { data: "boxed".to_string() })));
    }
}
