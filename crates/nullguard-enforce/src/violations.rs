use crate::types::{ViolationKind, ViolationReport};

/// A broken null contract, fatal to the invocation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NullViolation {
    #[error("Value of argument '{parameter}' passed to '{member}' cannot be null.")]
    NullArgument { member: String, parameter: String },

    #[error("Cannot set the value of property '{property}' to null.")]
    NullPropertyAssignment { property: String, parameter: String },

    #[error("Out parameter '{parameter}' of '{member}' is null.")]
    NullOutArgument { member: String, parameter: String },

    #[error("Return value of method '{member}' is null.")]
    NullReturnValue { member: String },

    #[error("Return value of property '{property}' is null.")]
    NullPropertyGetterResult { property: String },
}

impl NullViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            NullViolation::NullArgument { .. } => ViolationKind::Argument,
            NullViolation::NullPropertyAssignment { .. } => ViolationKind::PropertySet,
            NullViolation::NullOutArgument { .. } => ViolationKind::OutArgument,
            NullViolation::NullReturnValue { .. } => ViolationKind::ReturnValue,
            NullViolation::NullPropertyGetterResult { .. } => ViolationKind::PropertyGet,
        }
    }

    /// Name of the offending parameter, if the violation concerns one.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            NullViolation::NullArgument { parameter, .. }
            | NullViolation::NullPropertyAssignment { parameter, .. }
            | NullViolation::NullOutArgument { parameter, .. } => Some(parameter),
            NullViolation::NullReturnValue { .. }
            | NullViolation::NullPropertyGetterResult { .. } => None,
        }
    }

    pub fn member_name(&self) -> &str {
        match self {
            NullViolation::NullArgument { member, .. }
            | NullViolation::NullOutArgument { member, .. }
            | NullViolation::NullReturnValue { member } => member,
            NullViolation::NullPropertyAssignment { property, .. }
            | NullViolation::NullPropertyGetterResult { property } => property,
        }
    }
}

impl From<ViolationReport> for NullViolation {
    fn from(report: ViolationReport) -> Self {
        let member = report.member_name;
        let parameter = report.parameter_name.unwrap_or_default();
        match report.kind {
            ViolationKind::Argument => NullViolation::NullArgument { member, parameter },
            ViolationKind::PropertySet => NullViolation::NullPropertyAssignment {
                property: member,
                parameter,
            },
            ViolationKind::OutArgument => NullViolation::NullOutArgument { member, parameter },
            ViolationKind::ReturnValue => NullViolation::NullReturnValue { member },
            ViolationKind::PropertyGet => NullViolation::NullPropertyGetterResult { property: member },
        }
    }
}

impl From<&NullViolation> for ViolationReport {
    fn from(violation: &NullViolation) -> Self {
        ViolationReport {
            member_name: violation.member_name().to_string(),
            kind: violation.kind(),
            parameter_name: violation.parameter_name().map(str::to_string),
        }
    }
}

/// Failure of a guarded invocation.
///
/// `Body` carries the wrapped member's own error untouched; exit checks never
/// run for it.
#[derive(Debug, thiserror::Error)]
pub enum Intercepted<E> {
    #[error(transparent)]
    Violation(#[from] NullViolation),

    #[error("{0}")]
    Body(E),
}

impl<E> Intercepted<E> {
    pub fn violation(&self) -> Option<&NullViolation> {
        match self {
            Intercepted::Violation(v) => Some(v),
            Intercepted::Body(_) => None,
        }
    }

    pub fn into_body(self) -> Option<E> {
        match self {
            Intercepted::Body(e) => Some(e),
            Intercepted::Violation(_) => None,
        }
    }
}
