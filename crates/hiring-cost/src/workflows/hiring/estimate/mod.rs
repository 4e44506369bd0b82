mod config;
mod rules;

pub use config::{
    ApprenticeshipRules, MaxiDeductionRules, RulesError, SubsidyRules, WomenBonusRules,
    YouthBonusRules, MAX_RULE_RATE,
};

use super::domain::{CostEstimate, HiringProfile};
use tracing::debug;

/// Stateless estimator applying an injected rule set to a hiring profile.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    rules: SubsidyRules,
}

impl CostEstimator {
    pub fn new(rules: SubsidyRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SubsidyRules {
        &self.rules
    }

    /// Computes gross cost, subsidies and net cost. Bounds are not checked
    /// here; callers run [`HiringProfile::validate`] first, which also keeps the
    /// salary small enough for every rate product to stay in range.
    pub fn estimate(&self, profile: &HiringProfile) -> CostEstimate {
        let gross_cost = profile.gross_annual_salary * self.rules.gross_cost_multiplier;
        let ledger = rules::apply_rules(profile, &self.rules);
        let net_cost = gross_cost - ledger.total;

        debug!(
            contract = profile.contract_type.slug(),
            region = profile.region.slug(),
            %gross_cost,
            total_subsidy = %ledger.total,
            %net_cost,
            "hiring cost estimated"
        );

        CostEstimate {
            gross_cost,
            total_subsidy: ledger.total,
            net_cost,
            items: ledger.items,
        }
    }
}

/// Estimate with the built-in 2025 rules.
pub fn estimate(profile: &HiringProfile) -> CostEstimate {
    CostEstimator::default().estimate(profile)
}
