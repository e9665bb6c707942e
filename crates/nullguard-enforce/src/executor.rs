//! Enforcement: run a resolved plan against live values.
//!
//! Both checks are fail-fast. Only the first violating position, in ascending
//! order, is reported.

use nullguard_core::types::MemberKind;

use crate::types::{EnforcementPlan, ParameterCheck, ViolationKind, ViolationReport};
use crate::value::{is_null_at, NullCheck};

/// Entry check, run before the body. `args` is indexed by parameter position.
pub fn check_entry<V: NullCheck>(plan: &EnforcementPlan, args: &[V]) -> Result<(), ViolationReport> {
    let kind = if plan.member_kind == MemberKind::PropertySetter {
        ViolationKind::PropertySet
    } else {
        ViolationKind::Argument
    };
    first_null(&plan.input_checks, args).map_or(Ok(()), |check| Err(report(plan, kind, Some(check))))
}

/// Exit check, run only after the body completed successfully.
///
/// Output parameters are checked before the return value.
pub fn check_exit<V: NullCheck, R: NullCheck + ?Sized>(
    plan: &EnforcementPlan,
    args: &[V],
    return_value: &R,
) -> Result<(), ViolationReport> {
    if let Some(check) = first_null(&plan.output_checks, args) {
        return Err(report(plan, ViolationKind::OutArgument, Some(check)));
    }

    if plan.check_return_value && return_value.is_null() {
        let kind = if plan.member_kind == MemberKind::PropertyGetter {
            ViolationKind::PropertyGet
        } else {
            ViolationKind::ReturnValue
        };
        return Err(report(plan, kind, None));
    }

    Ok(())
}

fn first_null<'p, V: NullCheck>(checks: &'p [ParameterCheck], args: &[V]) -> Option<&'p ParameterCheck> {
    checks.iter().find(|c| is_null_at(args, c.position))
}

fn report(plan: &EnforcementPlan, kind: ViolationKind, check: Option<&ParameterCheck>) -> ViolationReport {
    let report = ViolationReport {
        member_name: plan.member_name.clone(),
        kind,
        parameter_name: check.map(|c| c.name.clone()),
    };
    tracing::debug!(
        member = %report.member_name,
        code = report.code(),
        parameter = report.parameter_name.as_deref(),
        "null contract violated"
    );
    report
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
