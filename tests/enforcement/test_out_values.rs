// Tests for output parameter enforcement and exit-check suppression
use crate::common::*;
use nullguard_core::config::{GuardConfig, OutParameterPolicy};
use nullguard_core::types::{MemberDescriptor, ParameterDescriptor};
use nullguard_enforce::{NullGuard, NullViolation};

#[test]
fn test_requires_non_null_out_value() {
    let guard = NullGuard::default();
    let err = call_void(&guard, &method_with_out_value(), &mut args(&[None])).unwrap_err();
    let violation = err.violation().expect("exit violation");
    assert_eq!(violation.to_string(), "Out parameter 'nonNullOutArg' of 'MethodWithOutValue' is null.");
}

#[test]
fn test_out_value_not_enforced_upon_error() {
    let guard = NullGuard::default();
    let result: Outcome<()> = guard.invoke(&method_with_out_value(), &mut args(&[None]), |_| Err(ContextMarshal));
    assert_eq!(result.unwrap_err().into_body(), Some(ContextMarshal));
}

#[test]
fn test_out_value_assigned_by_body() {
    let guard = NullGuard::default();
    let mut values = args(&[None]);
    let result: Outcome<()> = guard.invoke(&method_with_out_value(), &mut values, |a| {
        a[0] = Some("written".to_string());
        Ok(())
    });
    assert!(result.is_ok());
    assert_eq!(values[0].as_deref(), Some("written"));
}

#[test]
fn test_by_ref_checked_on_entry_and_exit() {
    let guard = NullGuard::default();
    let member = MemberDescriptor::method(OWNER, "Refresh", vec![ParameterDescriptor::by_ref(0, "slot")], false);

    let err = call_void(&guard, &member, &mut args(&[None])).unwrap_err();
    assert!(matches!(err.violation(), Some(NullViolation::NullArgument { .. })));

    let result: Outcome<()> = guard.invoke(&member, &mut args(&[Some("old")]), |a| {
        a[0] = None;
        Ok(())
    });
    assert!(matches!(
        result.unwrap_err().violation(),
        Some(NullViolation::NullOutArgument { .. })
    ));
}

#[test]
fn test_exempt_policy_skips_pure_out() {
    let guard = NullGuard::new(GuardConfig {
        out_parameters: OutParameterPolicy::Exempt,
        ..GuardConfig::default()
    });
    assert!(!guard.requires_enforcement(&method_with_out_value()));
    assert!(call_void(&guard, &method_with_out_value(), &mut args(&[None])).is_ok());
}
