use super::common::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::workflows::hiring::domain::{
    ContractType, HiringProfile, Region, SubsidyKind, MAX_GROSS_ANNUAL_SALARY,
};
use crate::workflows::hiring::estimate::{
    estimate, CostEstimator, RulesError, SubsidyRules, MAX_RULE_RATE,
};

#[test]
fn micro_business_apprenticeship_uses_averaged_rate() {
    let result = estimator().estimate(&apprentice(5, dec!(20000)));

    let relief = result
        .item(SubsidyKind::MicroBusinessApprenticeship)
        .expect("micro business relief applied");
    assert_eq!(relief.amount, dec!(5040));
    assert_eq!(relief.label, "Apprenticeship relief, <9 employees");
    assert!(result.item(SubsidyKind::StandardApprenticeship).is_none());
    assert!(result.item(SubsidyKind::YouthCohesionBonus).is_none());
    assert!(result.item(SubsidyKind::DisadvantagedWomenBonus).is_none());

    assert_eq!(result.gross_cost, dec!(26000));
    assert_eq!(result.total_subsidy, dec!(6000));
    assert_eq!(result.net_cost, dec!(20000));
}

#[test]
fn nine_employees_is_still_a_micro_business() {
    let result = estimator().estimate(&apprentice(9, dec!(20000)));
    assert!(result.item(SubsidyKind::MicroBusinessApprenticeship).is_some());

    let result = estimator().estimate(&apprentice(10, dec!(20000)));
    assert!(result.item(SubsidyKind::StandardApprenticeship).is_some());
}

#[test]
fn standard_apprenticeship_relief_for_larger_companies() {
    let result = estimator().estimate(&apprentice(20, dec!(30000)));

    let relief = result
        .item(SubsidyKind::StandardApprenticeship)
        .expect("standard relief applied");
    assert_eq!(relief.amount, dec!(6000));
    assert_eq!(relief.label, "Standard apprenticeship relief");

    let maxi = result
        .item(SubsidyKind::MaxiDeduction)
        .expect("maxi deduction applied");
    assert_eq!(maxi.amount, dec!(1440));
    assert_eq!(result.total_subsidy, dec!(7440));
}

#[test]
fn youth_bonus_in_southern_region_with_maxi_deduction() {
    let result = estimator().estimate(&permanent(28, Region::Campania));

    let kinds: Vec<SubsidyKind> = result.items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![SubsidyKind::YouthCohesionBonus, SubsidyKind::MaxiDeduction]
    );
    assert_eq!(result.items[0].amount, dec!(7500));
    assert_eq!(result.items[1].amount, dec!(1200));
    assert_eq!(result.total_subsidy, dec!(8700));
    assert_eq!(result.gross_cost, dec!(32500));
    assert_eq!(result.net_cost, dec!(23800));
    assert!(!result.has_non_cumulative_override());
}

#[test]
fn youth_bonus_outside_south_uses_lower_cap() {
    let result = estimator().estimate(&permanent(28, Region::Lombardia));

    let youth = result
        .item(SubsidyKind::YouthCohesionBonus)
        .expect("youth bonus applied");
    assert_eq!(youth.amount, dec!(6000));
    assert_eq!(result.total_subsidy, dec!(7200));
}

#[test]
fn youth_bonus_is_capped_in_south() {
    let profile = HiringProfile {
        gross_annual_salary: dec!(40000),
        ..permanent(28, Region::Sicilia)
    };
    let result = estimator().estimate(&profile);

    assert_eq!(
        result
            .item(SubsidyKind::YouthCohesionBonus)
            .map(|item| item.amount),
        Some(dec!(7800))
    );
    assert_eq!(result.total_subsidy, dec!(9720));
}

#[test]
fn candidates_aged_35_do_not_receive_youth_bonus() {
    let result = estimator().estimate(&permanent(35, Region::Campania));
    assert!(result.item(SubsidyKind::YouthCohesionBonus).is_none());
    assert_eq!(result.total_subsidy, dec!(1200));
}

#[test]
fn women_bonus_without_youth_bonus_overrides_from_zero() {
    let result = estimator().estimate(&disadvantaged_woman(40, Region::Lazio, 25));

    let women = result
        .item(SubsidyKind::DisadvantagedWomenBonus)
        .expect("women bonus applied");
    assert_eq!(women.amount, dec!(7500));
    assert!(women.counted);
    assert_eq!(result.total_subsidy, dec!(8700));
    assert_eq!(result.net_cost, result.gross_cost - dec!(8700));
}

#[test]
fn larger_women_bonus_replaces_youth_bonus_in_total() {
    let result = estimator().estimate(&disadvantaged_woman(28, Region::Lombardia, 24));

    let youth = result
        .item(SubsidyKind::YouthCohesionBonus)
        .expect("youth bonus listed");
    let women = result
        .item(SubsidyKind::DisadvantagedWomenBonus)
        .expect("women bonus listed");
    assert_eq!(youth.amount, dec!(6000));
    assert!(!youth.counted);
    assert_eq!(women.amount, dec!(7500));
    assert!(women.counted);

    assert_eq!(result.total_subsidy, dec!(8700));
    assert_eq!(result.itemized_sum(), dec!(14700));
    assert!(result.has_non_cumulative_override());
}

#[test]
fn smaller_or_equal_women_bonus_is_listed_but_not_counted() {
    let result = estimator().estimate(&disadvantaged_woman(28, Region::Campania, 6));

    let women = result
        .item(SubsidyKind::DisadvantagedWomenBonus)
        .expect("women bonus listed");
    assert_eq!(women.amount, dec!(7500));
    assert!(!women.counted);
    assert_eq!(result.total_subsidy, dec!(8700));
    assert_eq!(result.items.len(), 3);
}

#[test]
fn southern_women_need_six_months_of_unemployment() {
    let result = estimator().estimate(&disadvantaged_woman(40, Region::Campania, 5));
    assert!(result.item(SubsidyKind::DisadvantagedWomenBonus).is_none());

    let result = estimator().estimate(&disadvantaged_woman(40, Region::Campania, 6));
    assert!(result.item(SubsidyKind::DisadvantagedWomenBonus).is_some());
}

#[test]
fn women_bonus_requires_female_candidate() {
    let profile = HiringProfile {
        is_female: false,
        ..disadvantaged_woman(40, Region::Lazio, 24)
    };
    let result = estimator().estimate(&profile);
    assert!(result.item(SubsidyKind::DisadvantagedWomenBonus).is_none());
}

#[test]
fn fixed_term_never_yields_subsidies() {
    let profile = HiringProfile {
        candidate_age: 20,
        is_female: true,
        months_unemployed: 24,
        ..profile(ContractType::FixedTerm, dec!(25000))
    };
    let result = estimator().estimate(&profile);

    assert!(result.items.is_empty());
    assert_eq!(result.total_subsidy, Decimal::ZERO);
    assert_eq!(result.net_cost, result.gross_cost);
}

#[test]
fn maxi_deduction_is_last_and_always_summed() {
    for contract in [ContractType::Permanent, ContractType::ApprenticeshipProfessional] {
        let result = estimator().estimate(&profile(contract, dec!(25000)));
        let last = result.items.last().expect("at least one item");
        assert_eq!(last.kind, SubsidyKind::MaxiDeduction);
        assert_eq!(last.label, "Maxi-deduction 120% (corporate tax saving)");
        assert!(last.counted);
    }
}

#[test]
fn totals_hold_across_profile_grid() {
    let estimator = estimator();
    for contract in ContractType::ALL {
        for region in Region::ALL {
            for age in [15, 34, 35, 65] {
                for months in [0, 6, 24] {
                    for is_female in [false, true] {
                        let profile = HiringProfile {
                            gross_annual_salary: dec!(27345.67),
                            contract_type: contract,
                            company_employee_count: 12,
                            candidate_age: age,
                            region,
                            is_female,
                            months_unemployed: months,
                        };
                        let result = estimator.estimate(&profile);
                        assert_eq!(result.gross_cost, dec!(27345.67) * dec!(1.30));
                        assert_eq!(result.net_cost, result.gross_cost - result.total_subsidy);
                        assert!(result.items.iter().all(|item| item.amount >= Decimal::ZERO));
                    }
                }
            }
        }
    }
}

#[test]
fn estimates_are_idempotent() {
    let profile = disadvantaged_woman(28, Region::Lombardia, 24);
    let estimator = estimator();
    assert_eq!(estimator.estimate(&profile), estimator.estimate(&profile));
    assert_eq!(estimate(&profile), estimator.estimate(&profile));
}

#[test]
fn injected_rules_change_southern_caps() {
    let mut rules = SubsidyRules::italy_2025();
    rules.southern_regions.push(Region::Lazio);
    let custom = CostEstimator::new(rules);

    let profile = HiringProfile {
        gross_annual_salary: dec!(30000),
        ..permanent(28, Region::Lazio)
    };

    let baseline = estimator().estimate(&profile);
    let adjusted = custom.estimate(&profile);
    assert_eq!(
        baseline
            .item(SubsidyKind::YouthCohesionBonus)
            .map(|item| item.amount),
        Some(dec!(6000))
    );
    assert_eq!(
        adjusted
            .item(SubsidyKind::YouthCohesionBonus)
            .map(|item| item.amount),
        Some(dec!(7800))
    );
}

#[test]
fn rules_load_from_json() {
    let mut value = serde_json::to_value(SubsidyRules::italy_2025()).expect("serialize rules");
    value["youth_bonus"]["standard_cap"] = serde_json::json!(6500);
    let rules = SubsidyRules::from_json(&value.to_string()).expect("rules parse");

    assert_eq!(rules.youth_bonus.standard_cap, dec!(6500));
    assert_eq!(rules.southern_regions.len(), 8);
    assert!(rules.is_southern(Region::Abruzzo));
}

#[test]
fn malformed_rules_are_rejected() {
    let err = SubsidyRules::from_json("{\"gross_cost_multiplier\": ").expect_err("truncated json");
    assert!(matches!(err, RulesError::Parse(_)));
}

#[test]
fn out_of_range_rates_are_rejected() {
    let mut value = serde_json::to_value(SubsidyRules::italy_2025()).expect("serialize rules");
    value["maxi_deduction"]["corporate_tax_rate"] = serde_json::json!(11);
    let err = SubsidyRules::from_json(&value.to_string()).expect_err("rate above bound");
    assert!(matches!(
        err,
        RulesError::RateOutOfRange {
            field: "maxi_deduction.corporate_tax_rate",
            ..
        }
    ));

    let mut rules = SubsidyRules::italy_2025();
    rules.youth_bonus.relief_rate = dec!(-0.30);
    assert!(matches!(
        rules.check(),
        Err(RulesError::RateOutOfRange {
            field: "youth_bonus.relief_rate",
            ..
        })
    ));
    assert!(SubsidyRules::italy_2025().check().is_ok());
}

fn steepest_rules() -> SubsidyRules {
    let mut rules = SubsidyRules::italy_2025();
    rules.gross_cost_multiplier = MAX_RULE_RATE;
    rules.apprenticeship.standard_contribution_rate = MAX_RULE_RATE;
    rules.apprenticeship.micro_business_rate = Decimal::ZERO;
    rules.apprenticeship.standard_rate = Decimal::ZERO;
    rules.youth_bonus.relief_rate = MAX_RULE_RATE;
    rules.youth_bonus.southern_cap = MAX_GROSS_ANNUAL_SALARY * MAX_RULE_RATE;
    rules.women_bonus.relief_rate = MAX_RULE_RATE;
    rules.women_bonus.cap = MAX_GROSS_ANNUAL_SALARY * MAX_RULE_RATE;
    rules.maxi_deduction.extra_deduction_rate = MAX_RULE_RATE;
    rules.maxi_deduction.corporate_tax_rate = MAX_RULE_RATE;
    rules
}

#[test]
fn largest_valid_salary_estimates_under_any_accepted_rules() {
    let steep = steepest_rules();
    assert!(steep.check().is_ok());
    let steep = CostEstimator::new(steep);

    for contract_type in ContractType::ALL {
        for employees in [5, 50] {
            let profile = HiringProfile {
                gross_annual_salary: MAX_GROSS_ANNUAL_SALARY,
                contract_type,
                company_employee_count: employees,
                candidate_age: 20,
                region: Region::Campania,
                is_female: true,
                months_unemployed: 24,
            };
            assert_eq!(profile.validate(), Ok(()));

            let baseline = estimator().estimate(&profile);
            assert_eq!(baseline.gross_cost, dec!(1300000000));
            assert_eq!(baseline.net_cost, baseline.gross_cost - baseline.total_subsidy);

            let extreme = steep.estimate(&profile);
            assert_eq!(extreme.gross_cost, dec!(10000000000));
            assert_eq!(extreme.net_cost, extreme.gross_cost - extreme.total_subsidy);
        }
    }
}
