//! Non-null contract enforcement at member boundaries.
//!
//! Two stages, both pure over already-extracted metadata:
//! - [`policy`] resolves a member's [`EnforcementPlan`] from its descriptor and
//!   the enabled validation categories (once per member, cached by [`cache`]).
//! - [`executor`] runs the plan at entry and, after a successful call, at exit.
//!
//! Violations map 1:1 onto [`NullViolation`]:
//! - N001: null argument
//! - N002: null property assignment
//! - N003: null out argument
//! - N004: null return value
//! - N005: null property getter result

pub mod cache;
pub mod executor;
pub mod host;
pub mod policy;
pub mod types;
pub mod value;
pub mod violations;

pub use cache::PlanCache;
pub use executor::{check_entry, check_exit};
pub use host::{invoke, NullGuard};
pub use policy::{resolve, resolve_with};
pub use types::{EnforcementPlan, ParameterCheck, ViolationKind, ViolationReport};
pub use value::NullCheck;
pub use violations::{Intercepted, NullViolation};
