//! Policy resolution: which positions of a member need null checks.
//!
//! Resolution is a pure function of the member's metadata, the enabled
//! categories, and the [`OutParameterPolicy`]. It never fails; a member that
//! needs no checks gets an empty plan.

use nullguard_core::categories::{ValidationCategories, ValidationCategory};
use nullguard_core::config::OutParameterPolicy;
use nullguard_core::types::{MemberDescriptor, MemberKind, ParameterDescriptor, Visibility};

use crate::types::{EnforcementPlan, ParameterCheck};

/// Policy used by [`resolve`]: output parameters are eligible for checks.
pub const DEFAULT_OUT_PARAMETER_POLICY: OutParameterPolicy = OutParameterPolicy::Eligible;

/// Resolve with the default output-parameter policy.
pub fn resolve(member: &MemberDescriptor, categories: ValidationCategories) -> EnforcementPlan {
    resolve_with(member, categories, DEFAULT_OUT_PARAMETER_POLICY)
}

pub fn resolve_with(
    member: &MemberDescriptor,
    categories: ValidationCategories,
    out_policy: OutParameterPolicy,
) -> EnforcementPlan {
    if !passes_gate(member, categories) {
        tracing::trace!(
            member = %member.signature,
            kind = %member.kind,
            ?categories,
            "member excluded by category gate"
        );
        return EnforcementPlan::empty(&member.name, member.kind);
    }

    let mut qualifying: Vec<&ParameterDescriptor> = member
        .parameters
        .iter()
        .filter(|p| may_not_be_null(p, out_policy))
        .collect();
    qualifying.sort_by_key(|p| p.position);
    qualifying.dedup_by_key(|p| p.position);

    let input_checks = if categories.contains(ValidationCategory::Arguments) {
        checks_for(&qualifying, ParameterDescriptor::is_input)
    } else {
        vec![]
    };

    let output_checks = if categories.contains(ValidationCategory::OutValues) {
        checks_for(&qualifying, ParameterDescriptor::is_output)
    } else {
        vec![]
    };

    let check_return_value = categories.contains(ValidationCategory::ReturnValues)
        && member.kind != MemberKind::Constructor
        && member.returns_value
        && !member.return_allows_null;

    let plan = EnforcementPlan {
        member_name: member.name.clone(),
        member_kind: member.kind,
        input_checks,
        output_checks,
        check_return_value,
    };

    tracing::debug!(
        member = %member.signature,
        inputs = plan.input_checks.len(),
        outputs = plan.output_checks.len(),
        returns = plan.check_return_value,
        "resolved enforcement plan"
    );
    plan
}

/// Visibility and member-kind gate. A member failing it gets no checks at all.
pub fn passes_gate(member: &MemberDescriptor, categories: ValidationCategories) -> bool {
    if member.visibility == Visibility::NonPublic
        && !categories.contains(ValidationCategory::NonPublic)
    {
        return false;
    }
    // Constructors gate as methods.
    let required = if member.kind.is_property() {
        ValidationCategory::Properties
    } else {
        ValidationCategory::Methods
    };
    categories.contains(required)
}

/// Whether a parameter qualifies for a non-null requirement.
pub fn may_not_be_null(param: &ParameterDescriptor, out_policy: OutParameterPolicy) -> bool {
    if param.allows_null || param.is_optional || param.is_value_type {
        return false;
    }
    match out_policy {
        OutParameterPolicy::Eligible => true,
        OutParameterPolicy::Exempt => param.is_input(),
    }
}

fn checks_for(
    qualifying: &[&ParameterDescriptor],
    direction: fn(&ParameterDescriptor) -> bool,
) -> Vec<ParameterCheck> {
    qualifying
        .iter()
        .filter(|p| direction(p))
        .map(|p| ParameterCheck {
            position: p.position,
            name: p.name.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
