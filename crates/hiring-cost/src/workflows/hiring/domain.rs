use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment contract offered to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Permanent,
    ApprenticeshipProfessional,
    FixedTerm,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [
        ContractType::Permanent,
        ContractType::ApprenticeshipProfessional,
        ContractType::FixedTerm,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::ApprenticeshipProfessional => "Professional apprenticeship",
            Self::FixedTerm => "Fixed term",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::ApprenticeshipProfessional => "apprenticeship_professional",
            Self::FixedTerm => "fixed_term",
        }
    }

    /// Accepts the slug, the display label, or a short alias (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match needle.as_str() {
            "permanent" | "indefinite" => Some(Self::Permanent),
            "apprenticeship_professional" | "professional_apprenticeship" | "apprenticeship" => {
                Some(Self::ApprenticeshipProfessional)
            }
            "fixed_term" | "fixed" => Some(Self::FixedTerm),
            _ => None,
        }
    }
}

/// Italian administrative regions recognised by the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Abruzzo,
    Basilicata,
    Calabria,
    Campania,
    EmiliaRomagna,
    FriuliVeneziaGiulia,
    Lazio,
    Liguria,
    Lombardia,
    Marche,
    Molise,
    Piemonte,
    Puglia,
    Sardegna,
    Sicilia,
    Toscana,
    TrentinoAltoAdige,
    Umbria,
    ValleDAosta,
    Veneto,
    Other,
}

impl Region {
    /// Every selectable region, in the order the form offers them.
    pub const ALL: [Region; 21] = [
        Region::Abruzzo,
        Region::Basilicata,
        Region::Calabria,
        Region::Campania,
        Region::EmiliaRomagna,
        Region::FriuliVeneziaGiulia,
        Region::Lazio,
        Region::Liguria,
        Region::Lombardia,
        Region::Marche,
        Region::Molise,
        Region::Piemonte,
        Region::Puglia,
        Region::Sardegna,
        Region::Sicilia,
        Region::Toscana,
        Region::TrentinoAltoAdige,
        Region::Umbria,
        Region::ValleDAosta,
        Region::Veneto,
        Region::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Abruzzo => "Abruzzo",
            Self::Basilicata => "Basilicata",
            Self::Calabria => "Calabria",
            Self::Campania => "Campania",
            Self::EmiliaRomagna => "Emilia-Romagna",
            Self::FriuliVeneziaGiulia => "Friuli-Venezia Giulia",
            Self::Lazio => "Lazio",
            Self::Liguria => "Liguria",
            Self::Lombardia => "Lombardia",
            Self::Marche => "Marche",
            Self::Molise => "Molise",
            Self::Piemonte => "Piemonte",
            Self::Puglia => "Puglia",
            Self::Sardegna => "Sardegna",
            Self::Sicilia => "Sicilia",
            Self::Toscana => "Toscana",
            Self::TrentinoAltoAdige => "Trentino-Alto Adige",
            Self::Umbria => "Umbria",
            Self::ValleDAosta => "Valle d'Aosta",
            Self::Veneto => "Veneto",
            Self::Other => "Other",
        }
    }

    /// Wire name, identical to the serde representation.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Abruzzo => "abruzzo",
            Self::Basilicata => "basilicata",
            Self::Calabria => "calabria",
            Self::Campania => "campania",
            Self::EmiliaRomagna => "emilia_romagna",
            Self::FriuliVeneziaGiulia => "friuli_venezia_giulia",
            Self::Lazio => "lazio",
            Self::Liguria => "liguria",
            Self::Lombardia => "lombardia",
            Self::Marche => "marche",
            Self::Molise => "molise",
            Self::Piemonte => "piemonte",
            Self::Puglia => "puglia",
            Self::Sardegna => "sardegna",
            Self::Sicilia => "sicilia",
            Self::Toscana => "toscana",
            Self::TrentinoAltoAdige => "trentino_alto_adige",
            Self::Umbria => "umbria",
            Self::ValleDAosta => "valle_d_aosta",
            Self::Veneto => "veneto",
            Self::Other => "other",
        }
    }

    /// Matches either the slug or the display label, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ALL.into_iter().find(|region| {
            region.slug().eq_ignore_ascii_case(needle) || region.label().eq_ignore_ascii_case(needle)
        })
    }
}

/// Inclusive bounds enforced when a profile is collected.
pub const MIN_CANDIDATE_AGE: u8 = 15;
pub const MAX_CANDIDATE_AGE: u8 = 65;
pub const MAX_MONTHS_UNEMPLOYED: u8 = 24;
pub const MIN_EMPLOYEE_COUNT: u32 = 1;
/// One billion euro. Keeps every rate product far inside `Decimal`'s range.
pub const MAX_GROSS_ANNUAL_SALARY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Candidate and employer facts driving a single estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringProfile {
    pub gross_annual_salary: Decimal,
    pub contract_type: ContractType,
    pub company_employee_count: u32,
    pub candidate_age: u8,
    pub region: Region,
    #[serde(default)]
    pub is_female: bool,
    #[serde(default)]
    pub months_unemployed: u8,
}

impl HiringProfile {
    /// Checks the collection bounds; the estimator itself never rejects a profile.
    pub fn validate(&self) -> Result<(), ProfileViolation> {
        if self.gross_annual_salary < Decimal::ZERO {
            return Err(ProfileViolation::NegativeSalary);
        }
        if self.gross_annual_salary > MAX_GROSS_ANNUAL_SALARY {
            return Err(ProfileViolation::SalaryTooLarge {
                max: MAX_GROSS_ANNUAL_SALARY,
            });
        }
        if self.company_employee_count < MIN_EMPLOYEE_COUNT {
            return Err(ProfileViolation::EmployeeCountTooLow {
                min: MIN_EMPLOYEE_COUNT,
            });
        }
        if !(MIN_CANDIDATE_AGE..=MAX_CANDIDATE_AGE).contains(&self.candidate_age) {
            return Err(ProfileViolation::AgeOutOfRange {
                min: MIN_CANDIDATE_AGE,
                max: MAX_CANDIDATE_AGE,
                found: self.candidate_age,
            });
        }
        if self.months_unemployed > MAX_MONTHS_UNEMPLOYED {
            return Err(ProfileViolation::MonthsUnemployedOutOfRange {
                max: MAX_MONTHS_UNEMPLOYED,
                found: self.months_unemployed,
            });
        }
        Ok(())
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} years",
            self.contract_type.label(),
            self.candidate_age
        )
    }
}

/// Bounds violations raised by the collection layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("gross annual salary cannot be negative")]
    NegativeSalary,
    #[error("gross annual salary cannot exceed {max}")]
    SalaryTooLarge { max: Decimal },
    #[error("company must employ at least {min} person(s)")]
    EmployeeCountTooLow { min: u32 },
    #[error("candidate age must be between {min} and {max} (found {found})")]
    AgeOutOfRange { min: u8, max: u8, found: u8 },
    #[error("months unemployed must be at most {max} (found {found})")]
    MonthsUnemployedOutOfRange { max: u8, found: u8 },
}

/// Subsidy families produced by the rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsidyKind {
    MicroBusinessApprenticeship,
    StandardApprenticeship,
    YouthCohesionBonus,
    DisadvantagedWomenBonus,
    MaxiDeduction,
}

impl SubsidyKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MicroBusinessApprenticeship => "Apprenticeship relief, <9 employees",
            Self::StandardApprenticeship => "Standard apprenticeship relief",
            Self::YouthCohesionBonus => "Youth cohesion bonus",
            Self::DisadvantagedWomenBonus => "Disadvantaged women bonus",
            Self::MaxiDeduction => "Maxi-deduction 120% (corporate tax saving)",
        }
    }
}

/// One applied subsidy. `counted` is false when a non-cumulative bonus lost
/// to another and its amount is listed but not part of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyLineItem {
    pub kind: SubsidyKind,
    pub label: String,
    pub amount: Decimal,
    pub counted: bool,
}

impl SubsidyLineItem {
    pub(crate) fn new(kind: SubsidyKind, amount: Decimal) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            amount,
            counted: true,
        }
    }
}

/// Result of a single estimate. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub gross_cost: Decimal,
    pub total_subsidy: Decimal,
    pub net_cost: Decimal,
    pub items: Vec<SubsidyLineItem>,
}

impl CostEstimate {
    /// Subsidy as a whole percentage of gross cost, truncated. `None` when
    /// the gross cost is zero.
    pub fn subsidy_pct_of_gross(&self) -> Option<i64> {
        if self.gross_cost.is_zero() {
            return None;
        }
        let pct = self.total_subsidy / self.gross_cost * Decimal::ONE_HUNDRED;
        Some(whole_units(pct))
    }

    /// True when at least one listed bonus does not contribute to the total.
    pub fn has_non_cumulative_override(&self) -> bool {
        self.items.iter().any(|item| !item.counted)
    }

    /// Sum of every listed amount, counted or not.
    pub fn itemized_sum(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    pub fn item(&self, kind: SubsidyKind) -> Option<&SubsidyLineItem> {
        self.items.iter().find(|item| item.kind == kind)
    }
}

/// Truncates toward zero to whole currency units.
pub fn whole_units(value: Decimal) -> i64 {
    use rust_decimal::prelude::ToPrimitive;

    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
