// Integration tests: configuration file roundtrip
//
// Validates that nullguard.json is read into a guard and that per-member
// overrides change what gets enforced.
use std::fs;

use nullguard_core::categories::ValidationCategories;
use nullguard_core::config::{GuardConfig, MemberOverride, OutParameterPolicy, CONFIG_FILE};
use nullguard_core::types::{MemberDescriptor, ParameterDescriptor};
use nullguard_enforce::{Intercepted, NullGuard};
use tempfile::TempDir;

fn private_method(owner: &str) -> MemberDescriptor {
    MemberDescriptor::method(owner, "SomePrivateMethod", vec![ParameterDescriptor::new(0, "x")], false)
        .non_public()
}

fn call(guard: &NullGuard, member: &MemberDescriptor) -> Result<(), Intercepted<std::io::Error>> {
    guard.invoke(member, &mut [None::<String>], |_| Ok(()))
}

#[test]
fn test_missing_config_uses_default_policy() {
    let dir = TempDir::new().unwrap();
    let guard = NullGuard::from_dir(dir.path());
    assert_eq!(guard.config(), &GuardConfig::default());
    assert!(call(&guard, &private_method("Sample")).is_ok());
}

#[test]
fn test_config_written_and_loaded() {
    let dir = TempDir::new().unwrap();
    let config = GuardConfig {
        version: "0.4.0".to_string(),
        categories: ValidationCategories::ALL_PUBLIC,
        out_parameters: OutParameterPolicy::Exempt,
        overrides: vec![MemberOverride {
            member_prefix: "ClassWithPrivateMethod::".to_string(),
            categories: ValidationCategories::ALL,
        }],
    };
    fs::write(
        dir.path().join(CONFIG_FILE),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    let guard = NullGuard::from_dir(dir.path());
    assert_eq!(guard.config(), &config);
    assert_eq!(guard.cache().out_policy(), OutParameterPolicy::Exempt);

    assert!(call(&guard, &private_method("Sample")).is_ok());
    let err = call(&guard, &private_method("ClassWithPrivateMethod")).unwrap_err();
    assert!(err.violation().is_some());
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), r#"{"version": "1", "categories": ["events"]}"#).unwrap();

    let guard = NullGuard::from_dir(dir.path());
    assert_eq!(guard.config(), &GuardConfig::default());
    assert!(GuardConfig::load_strict(dir.path()).is_err());
}
