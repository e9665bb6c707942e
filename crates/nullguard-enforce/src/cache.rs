//! PlanCache — resolved plans keyed by member identity, shared across threads.

use std::sync::Arc;

use dashmap::DashMap;
use nullguard_core::categories::ValidationCategories;
use nullguard_core::config::OutParameterPolicy;
use nullguard_core::types::{MemberDescriptor, MemberId};

use crate::policy::{resolve_with, DEFAULT_OUT_PARAMETER_POLICY};
use crate::types::EnforcementPlan;

type PlanKey = (MemberId, ValidationCategories);

/// Compute-once cache of enforcement plans.
///
/// Entries are never evicted or replaced; the number of entries is bounded by
/// the number of distinct (member, categories) pairs the host guards.
#[derive(Debug)]
pub struct PlanCache {
    plans: DashMap<PlanKey, Arc<EnforcementPlan>>,
    out_policy: OutParameterPolicy,
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanCache {
    pub fn new() -> Self {
        Self::with_out_policy(DEFAULT_OUT_PARAMETER_POLICY)
    }

    pub fn with_out_policy(out_policy: OutParameterPolicy) -> Self {
        Self {
            plans: DashMap::new(),
            out_policy,
        }
    }

    pub fn out_policy(&self) -> OutParameterPolicy {
        self.out_policy
    }

    /// Return the cached plan, resolving and inserting it on first use.
    ///
    /// Concurrent first lookups of one key resolve under the shard lock, so
    /// every caller observes the same `Arc`.
    pub fn get_or_resolve(
        &self,
        member: &MemberDescriptor,
        categories: ValidationCategories,
    ) -> Arc<EnforcementPlan> {
        let key = (member.id(), categories);
        if let Some(plan) = self.plans.get(&key) {
            return Arc::clone(plan.value());
        }
        let plan = self
            .plans
            .entry(key)
            .or_insert_with(|| Arc::new(resolve_with(member, categories, self.out_policy)));
        Arc::clone(plan.value())
    }

    pub fn get(&self, id: &MemberId, categories: ValidationCategories) -> Option<Arc<EnforcementPlan>> {
        self.plans
            .get(&(id.clone(), categories))
            .map(|r| Arc::clone(r.value()))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
