use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::super::domain::Region;

/// Largest rate or multiplier a rule set may carry.
pub const MAX_RULE_RATE: Decimal = Decimal::TEN;

/// Rates, caps and thresholds applied by the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyRules {
    /// Salary multiplier giving the employer's gross cost (salary plus contributions).
    pub gross_cost_multiplier: Decimal,
    pub apprenticeship: ApprenticeshipRules,
    pub youth_bonus: YouthBonusRules,
    pub women_bonus: WomenBonusRules,
    pub maxi_deduction: MaxiDeductionRules,
    /// Regions eligible for the higher cohesion caps and shorter unemployment threshold.
    pub southern_regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprenticeshipRules {
    /// Ordinary employer contribution rate the apprenticeship rates replace.
    pub standard_contribution_rate: Decimal,
    /// Largest headcount still treated as a micro business.
    pub micro_business_max_employees: u32,
    /// Averaged three-year apprentice rate for micro businesses.
    pub micro_business_rate: Decimal,
    pub standard_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthBonusRules {
    /// Candidates strictly younger than this qualify.
    pub age_limit: u8,
    pub relief_rate: Decimal,
    pub southern_cap: Decimal,
    pub standard_cap: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WomenBonusRules {
    pub relief_rate: Decimal,
    pub cap: Decimal,
    pub southern_min_months_unemployed: u8,
    pub standard_min_months_unemployed: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxiDeductionRules {
    /// Share of salary deductible on top of the ordinary 100%.
    pub extra_deduction_rate: Decimal,
    /// IRES rate applied to the extra deduction.
    pub corporate_tax_rate: Decimal,
}

impl SubsidyRules {
    /// Rules in force for hires made during 2025.
    pub fn italy_2025() -> Self {
        Self {
            gross_cost_multiplier: dec!(1.30),
            apprenticeship: ApprenticeshipRules {
                standard_contribution_rate: dec!(0.30),
                micro_business_max_employees: 9,
                micro_business_rate: dec!(0.048),
                standard_rate: dec!(0.10),
            },
            youth_bonus: YouthBonusRules {
                age_limit: 35,
                relief_rate: dec!(0.30),
                southern_cap: dec!(7800),
                standard_cap: dec!(6000),
            },
            women_bonus: WomenBonusRules {
                relief_rate: dec!(0.30),
                cap: dec!(7800),
                southern_min_months_unemployed: 6,
                standard_min_months_unemployed: 24,
            },
            maxi_deduction: MaxiDeductionRules {
                extra_deduction_rate: dec!(0.20),
                corporate_tax_rate: dec!(0.24),
            },
            southern_regions: vec![
                Region::Campania,
                Region::Puglia,
                Region::Sicilia,
                Region::Calabria,
                Region::Sardegna,
                Region::Basilicata,
                Region::Molise,
                Region::Abruzzo,
            ],
        }
    }

    pub fn is_southern(&self, region: Region) -> bool {
        self.southern_regions.contains(&region)
    }

    /// Loads a JSON rule set, typically pointed to by `HIRING_RULES_PATH`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(raw).map_err(RulesError::Parse)?;
        rules.check()?;
        Ok(rules)
    }

    /// Every rate must lie in `0..=MAX_RULE_RATE`.
    pub fn check(&self) -> Result<(), RulesError> {
        for (field, value) in self.rates() {
            if value < Decimal::ZERO || value > MAX_RULE_RATE {
                return Err(RulesError::RateOutOfRange { field, value });
            }
        }
        Ok(())
    }

    fn rates(&self) -> [(&'static str, Decimal); 8] {
        [
            ("gross_cost_multiplier", self.gross_cost_multiplier),
            (
                "apprenticeship.standard_contribution_rate",
                self.apprenticeship.standard_contribution_rate,
            ),
            (
                "apprenticeship.micro_business_rate",
                self.apprenticeship.micro_business_rate,
            ),
            ("apprenticeship.standard_rate", self.apprenticeship.standard_rate),
            ("youth_bonus.relief_rate", self.youth_bonus.relief_rate),
            ("women_bonus.relief_rate", self.women_bonus.relief_rate),
            (
                "maxi_deduction.extra_deduction_rate",
                self.maxi_deduction.extra_deduction_rate,
            ),
            (
                "maxi_deduction.corporate_tax_rate",
                self.maxi_deduction.corporate_tax_rate,
            ),
        ]
    }
}

impl Default for SubsidyRules {
    fn default() -> Self {
        Self::italy_2025()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("unable to read rule set {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rule set is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("rule {field} must be between 0 and {}, found {value}", MAX_RULE_RATE)]
    RateOutOfRange { field: &'static str, value: Decimal },
}
