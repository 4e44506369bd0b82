//! Hiring cost estimation: profile intake, subsidy rules and report output.

pub mod domain;
pub mod estimate;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    whole_units, ContractType, CostEstimate, HiringProfile, ProfileViolation, Region, SubsidyKind,
    SubsidyLineItem,
};
pub use estimate::{estimate, CostEstimator, RulesError, SubsidyRules};
pub use report::{EstimateReport, EstimateSummaryView, ReportDocument};
