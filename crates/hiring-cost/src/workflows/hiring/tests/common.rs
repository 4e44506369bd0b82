use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::workflows::hiring::domain::{ContractType, HiringProfile, Region};
use crate::workflows::hiring::estimate::{CostEstimator, SubsidyRules};

pub(super) fn profile(contract_type: ContractType, salary: Decimal) -> HiringProfile {
    HiringProfile {
        gross_annual_salary: salary,
        contract_type,
        company_employee_count: 5,
        candidate_age: 24,
        region: Region::Campania,
        is_female: false,
        months_unemployed: 0,
    }
}

pub(super) fn permanent(age: u8, region: Region) -> HiringProfile {
    HiringProfile {
        candidate_age: age,
        region,
        ..profile(ContractType::Permanent, dec!(25000))
    }
}

pub(super) fn apprentice(employees: u32, salary: Decimal) -> HiringProfile {
    HiringProfile {
        company_employee_count: employees,
        ..profile(ContractType::ApprenticeshipProfessional, salary)
    }
}

pub(super) fn disadvantaged_woman(age: u8, region: Region, months: u8) -> HiringProfile {
    HiringProfile {
        is_female: true,
        months_unemployed: months,
        ..permanent(age, region)
    }
}

pub(super) fn estimator() -> CostEstimator {
    CostEstimator::new(SubsidyRules::italy_2025())
}
