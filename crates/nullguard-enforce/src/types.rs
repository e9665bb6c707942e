use nullguard_core::types::MemberKind;
use serde::{Deserialize, Serialize};

/// A parameter position that must hold a non-null value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterCheck {
    pub position: usize,
    pub name: String,
}

/// The resolved set of null checks for one member.
///
/// Checks are kept in ascending position order; the executor relies on it to
/// report the first violating position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnforcementPlan {
    pub member_name: String,
    pub member_kind: MemberKind,
    /// Checked at entry.
    pub input_checks: Vec<ParameterCheck>,
    /// Checked at exit, after a successful call.
    pub output_checks: Vec<ParameterCheck>,
    pub check_return_value: bool,
}

impl EnforcementPlan {
    /// A plan that checks nothing.
    pub fn empty(member_name: impl Into<String>, member_kind: MemberKind) -> Self {
        Self {
            member_name: member_name.into(),
            member_kind,
            input_checks: vec![],
            output_checks: vec![],
            check_return_value: false,
        }
    }

    /// True when no check applies; the host may call the body directly.
    pub fn is_empty(&self) -> bool {
        self.input_checks.is_empty() && self.output_checks.is_empty() && !self.check_return_value
    }

    pub fn input_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.input_checks.iter().map(|c| c.position)
    }

    pub fn output_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.output_checks.iter().map(|c| c.position)
    }
}

/// What kind of null contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Argument,
    PropertySet,
    OutArgument,
    ReturnValue,
    PropertyGet,
}

impl ViolationKind {
    /// Stable short code used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Argument => "N001",
            ViolationKind::PropertySet => "N002",
            ViolationKind::OutArgument => "N003",
            ViolationKind::ReturnValue => "N004",
            ViolationKind::PropertyGet => "N005",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            ViolationKind::Argument => "null_argument",
            ViolationKind::PropertySet => "null_property_assignment",
            ViolationKind::OutArgument => "null_out_argument",
            ViolationKind::ReturnValue => "null_return_value",
            ViolationKind::PropertyGet => "null_property_getter_result",
        }
    }

    /// Entry violations stop the body from running.
    pub fn is_entry(&self) -> bool {
        matches!(self, ViolationKind::Argument | ViolationKind::PropertySet)
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// The outcome of a failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    pub member_name: String,
    pub kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parameter_name: Option<String>,
}

impl ViolationReport {
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}
