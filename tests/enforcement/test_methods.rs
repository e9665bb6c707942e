// Tests for method argument and return value enforcement
use crate::common::*;
use nullguard_enforce::{NullGuard, NullViolation, ViolationKind};

#[test]
fn test_requires_non_null_argument() {
    let guard = NullGuard::default();
    let err = call_void(&guard, &some_method(), &mut args(&[None, Some("")])).unwrap_err();
    let violation = err.violation().expect("entry violation");
    assert_eq!(violation.kind(), ViolationKind::Argument);
    assert_eq!(violation.parameter_name(), Some("nonNullArg"));
    assert_eq!(violation.member_name(), "SomeMethod");
}

#[test]
fn test_allows_null_when_annotated() {
    let guard = NullGuard::default();
    assert!(call_void(&guard, &some_method(), &mut args(&[Some(""), None])).is_ok());
}

#[test]
fn test_entry_violation_prevents_body() {
    let guard = NullGuard::default();
    let mut ran = false;
    let result: Outcome<()> = guard.invoke(&some_method(), &mut args(&[None, None]), |_| {
        ran = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);
}

#[test]
fn test_requires_non_null_return_value() {
    let guard = NullGuard::default();
    let member = method_with_return_value();

    let err = call(&guard, &member, &mut args(&[Some("true")]), None).unwrap_err();
    assert_eq!(
        err.violation(),
        Some(&NullViolation::NullReturnValue {
            member: "MethodWithReturnValue".to_string()
        })
    );
    assert_eq!(
        err.to_string(),
        "Return value of method 'MethodWithReturnValue' is null."
    );

    let ok = call(&guard, &member, &mut args(&[Some("false")]), Some("")).unwrap();
    assert_eq!(ok.as_deref(), Some(""));
}

#[test]
fn test_allows_null_return_when_annotated() {
    let guard = NullGuard::default();
    let result = call(&guard, &method_allows_null_return(), &mut [], None);
    assert_eq!(result.unwrap(), None);
    assert!(!guard.requires_enforcement(&method_allows_null_return()));
}

#[test]
fn test_body_error_passes_through_untouched() {
    let guard = NullGuard::default();
    let result: Outcome<Option<String>> =
        guard.invoke(&method_with_return_value(), &mut args(&[Some("true")]), |_| Err(ContextMarshal));
    let err = result.unwrap_err();
    assert!(err.violation().is_none());
    assert_eq!(err.to_string(), "context marshal failure");
}
