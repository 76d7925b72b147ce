// ============================================================================
// Domain Layer - Collaborators of the Outcome Type
// ============================================================================
//
// Outcomes carry domain events produced by aggregates. The event type is
// owned by each aggregate; this layer only defines the marker they share.
//
// ============================================================================

pub mod event;

pub use event::DomainEvent;
