// ============================================================================
// Outcome Construction Errors
// ============================================================================
//
// Programmer errors raised by the checked factories. A business failure is
// never one of these: it is a failure Outcome.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("Value must be present; use success_unit() or success_events() for results without a value")]
    MissingValue,

    #[error("Events must be present")]
    MissingEvents,

    #[error("Events must not contain missing elements (index {index})")]
    MissingEvent { index: usize },

    #[error("Error messages must be present")]
    MissingErrors,

    #[error("Error messages must not contain missing elements (index {index})")]
    MissingError { index: usize },
}
