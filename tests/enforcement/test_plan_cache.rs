// Tests for plan caching across invocations and threads
use std::sync::Arc;
use std::thread;

use crate::common::*;
use nullguard_core::categories::ValidationCategories;
use nullguard_core::types::{MemberDescriptor, ParameterDescriptor};
use nullguard_enforce::{resolve, NullGuard, ViolationKind};

#[test]
fn test_plan_resolved_once_per_member() {
    let guard = NullGuard::default();
    for _ in 0..3 {
        let _ = call_void(&guard, &some_method(), &mut args(&[Some("a"), None]));
    }
    let _ = call(&guard, &method_with_return_value(), &mut args(&[Some("false")]), Some(""));
    assert_eq!(guard.cache().len(), 2);
}

#[test]
fn test_cached_plan_matches_fresh_resolution() {
    let guard = NullGuard::default();
    let member = some_method();
    let cached = guard.plan_for(&member);
    assert_eq!(*cached, resolve(&member, ValidationCategories::ALL_PUBLIC));
}

#[test]
fn test_concurrent_invocations_share_plan() {
    let guard = Arc::new(NullGuard::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let guard = Arc::clone(&guard);
            thread::spawn(move || {
                let first = if i % 2 == 0 { None } else { Some("x") };
                call_void(&guard, &some_method(), &mut args(&[first, None])).is_ok()
            })
        })
        .collect();
    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 4);
    assert_eq!(guard.cache().len(), 1);
}

fn foo(param: ParameterDescriptor) -> MemberDescriptor {
    MemberDescriptor::method(OWNER, "Foo", vec![param], false)
}

#[test]
fn test_overloads_differing_in_value_type_keep_own_plans() {
    let guard = NullGuard::default();
    let by_value = foo(ParameterDescriptor::new(0, "a").value_type());
    let by_reference = foo(ParameterDescriptor::new(0, "a"));

    assert!(guard.plan_for(&by_value).is_empty());
    let err = call_void(&guard, &by_reference, &mut args(&[None])).unwrap_err();
    assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Argument));
    assert_eq!(guard.cache().len(), 2);
}

#[test]
fn test_overloads_with_equal_host_signatures_keep_own_plans() {
    let guard = NullGuard::default();
    let nullable = foo(ParameterDescriptor::new(0, "a").nullable()).with_signature("Sample::Foo(object)");
    let strict = foo(ParameterDescriptor::new(0, "a")).with_signature("Sample::Foo(object)");

    assert!(call_void(&guard, &nullable, &mut args(&[None])).is_ok());
    let err = call_void(&guard, &strict, &mut args(&[None])).unwrap_err();
    assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::Argument));
}

#[test]
fn test_method_named_like_getter_keeps_own_plan() {
    let guard = NullGuard::default();
    let method = MemberDescriptor::method(OWNER, "get_NonNullProperty", vec![], true).nullable_return();
    let property = getter("NonNullProperty");

    assert!(call(&guard, &method, &mut args(&[]), None).is_ok());
    let err = call(&guard, &property, &mut args(&[]), None).unwrap_err();
    assert_eq!(err.violation().map(|v| v.kind()), Some(ViolationKind::PropertyGet));
}
