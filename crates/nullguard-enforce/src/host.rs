//! Reference interception host.
//!
//! Wraps a member body in the Entry → Body → Exit pipeline:
//! - a violation at entry stops the body from running,
//! - a body error is returned as-is and exit checks are skipped,
//! - exit checks run only after the body succeeded.

use std::path::Path;
use std::sync::Arc;

use nullguard_core::categories::ValidationCategories;
use nullguard_core::config::GuardConfig;
use nullguard_core::types::MemberDescriptor;

use crate::cache::PlanCache;
use crate::executor::{check_entry, check_exit};
use crate::types::EnforcementPlan;
use crate::value::NullCheck;
use crate::violations::{Intercepted, NullViolation};

/// Run `body` under `plan`.
///
/// `args` is indexed by parameter position. The body may write output
/// parameters through the mutable slice; they are checked after it returns.
pub fn invoke<V, R, E, F>(plan: &EnforcementPlan, args: &mut [V], body: F) -> Result<R, Intercepted<E>>
where
    V: NullCheck,
    R: NullCheck,
    F: FnOnce(&mut [V]) -> Result<R, E>,
{
    if plan.is_empty() {
        return body(args).map_err(Intercepted::Body);
    }

    check_entry(plan, &*args).map_err(NullViolation::from)?;
    let value = body(&mut *args).map_err(Intercepted::Body)?;
    check_exit(plan, &*args, &value).map_err(NullViolation::from)?;
    Ok(value)
}

/// Configured guard: resolves categories per member, caches plans, and
/// runs invocations through [`invoke`].
#[derive(Debug, Default)]
pub struct NullGuard {
    config: GuardConfig,
    cache: PlanCache,
}

impl NullGuard {
    pub fn new(config: GuardConfig) -> Self {
        let cache = PlanCache::with_out_policy(config.out_parameters);
        Self { config, cache }
    }

    /// Create a guard configured from `nullguard.json` in `config_dir`.
    pub fn from_dir(config_dir: &Path) -> Self {
        Self::new(GuardConfig::load(config_dir))
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    pub fn categories_for(&self, member: &MemberDescriptor) -> ValidationCategories {
        self.config.categories_for(&member.signature)
    }

    /// The cached plan for `member`, resolved on first use.
    pub fn plan_for(&self, member: &MemberDescriptor) -> Arc<EnforcementPlan> {
        self.cache.get_or_resolve(member, self.categories_for(member))
    }

    /// False when `member` needs no checks and can be called unwrapped.
    pub fn requires_enforcement(&self, member: &MemberDescriptor) -> bool {
        !self.plan_for(member).is_empty()
    }

    pub fn invoke<V, R, E, F>(
        &self,
        member: &MemberDescriptor,
        args: &mut [V],
        body: F,
    ) -> Result<R, Intercepted<E>>
    where
        V: NullCheck,
        R: NullCheck,
        F: FnOnce(&mut [V]) -> Result<R, E>,
    {
        invoke(&self.plan_for(member), args, body)
    }
}
