use rust_decimal::Decimal;
use tracing::debug;

use super::super::domain::{ContractType, HiringProfile, SubsidyKind, SubsidyLineItem};
use super::config::SubsidyRules;

/// Running totals while the rules are applied in order.
pub(crate) struct SubsidyLedger {
    pub items: Vec<SubsidyLineItem>,
    pub total: Decimal,
}

impl SubsidyLedger {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    fn add(&mut self, kind: SubsidyKind, amount: Decimal) -> usize {
        debug!(subsidy = kind.label(), %amount, "subsidy applied");
        self.total += amount;
        self.items.push(SubsidyLineItem::new(kind, amount));
        self.items.len() - 1
    }
}

pub(crate) fn apply_rules(profile: &HiringProfile, rules: &SubsidyRules) -> SubsidyLedger {
    let mut ledger = SubsidyLedger::new();

    match profile.contract_type {
        ContractType::ApprenticeshipProfessional => apprenticeship_relief(profile, rules, &mut ledger),
        ContractType::Permanent => permanent_hire_bonuses(profile, rules, &mut ledger),
        ContractType::FixedTerm => {}
    }

    if qualifies_for_maxi_deduction(profile.contract_type) {
        let maxi = &rules.maxi_deduction;
        let saving =
            profile.gross_annual_salary * maxi.extra_deduction_rate * maxi.corporate_tax_rate;
        ledger.add(SubsidyKind::MaxiDeduction, saving);
    }

    ledger
}

fn apprenticeship_relief(profile: &HiringProfile, rules: &SubsidyRules, ledger: &mut SubsidyLedger) {
    let appr = &rules.apprenticeship;
    let (kind, apprentice_rate) =
        if profile.company_employee_count <= appr.micro_business_max_employees {
            (SubsidyKind::MicroBusinessApprenticeship, appr.micro_business_rate)
        } else {
            (SubsidyKind::StandardApprenticeship, appr.standard_rate)
        };

    let relief = profile.gross_annual_salary * (appr.standard_contribution_rate - apprentice_rate);
    ledger.add(kind, relief);
}

fn permanent_hire_bonuses(
    profile: &HiringProfile,
    rules: &SubsidyRules,
    ledger: &mut SubsidyLedger,
) {
    let southern = rules.is_southern(profile.region);

    let mut youth: Option<(usize, Decimal)> = None;
    let youth_rules = &rules.youth_bonus;
    if profile.candidate_age < youth_rules.age_limit {
        let cap = if southern {
            youth_rules.southern_cap
        } else {
            youth_rules.standard_cap
        };
        let amount = (profile.gross_annual_salary * youth_rules.relief_rate).min(cap);
        let index = ledger.add(SubsidyKind::YouthCohesionBonus, amount);
        youth = Some((index, amount));
    }

    if !is_disadvantaged_woman(profile, rules, southern) {
        return;
    }

    let women = &rules.women_bonus;
    let amount = (profile.gross_annual_salary * women.relief_rate).min(women.cap);
    let mut item = SubsidyLineItem::new(SubsidyKind::DisadvantagedWomenBonus, amount);

    // Not cumulative with the youth bonus: the larger wins and replaces the
    // accumulated total outright.
    let youth_amount = youth.map(|(_, amount)| amount).unwrap_or(Decimal::ZERO);
    if amount > youth_amount {
        debug!(%amount, %youth_amount, "women bonus replaces accumulated subsidy");
        ledger.total = amount;
        if let Some((index, _)) = youth {
            ledger.items[index].counted = false;
        }
    } else {
        debug!(%amount, %youth_amount, "women bonus listed but not counted");
        item.counted = false;
    }
    ledger.items.push(item);
}

fn is_disadvantaged_woman(profile: &HiringProfile, rules: &SubsidyRules, southern: bool) -> bool {
    if !profile.is_female {
        return false;
    }
    let threshold = if southern {
        rules.women_bonus.southern_min_months_unemployed
    } else {
        rules.women_bonus.standard_min_months_unemployed
    };
    profile.months_unemployed >= threshold
}

fn qualifies_for_maxi_deduction(contract: ContractType) -> bool {
    matches!(
        contract,
        ContractType::Permanent | ContractType::ApprenticeshipProfessional
    )
}
