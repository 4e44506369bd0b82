use crate::infra::{parse_contract, parse_region, parse_salary};
use clap::Args;
use hiring_cost::config::AppConfig;
use hiring_cost::error::AppError;
use hiring_cost::workflows::hiring::domain::{
    MAX_CANDIDATE_AGE, MAX_MONTHS_UNEMPLOYED, MIN_CANDIDATE_AGE,
};
use hiring_cost::workflows::hiring::report::{format_currency, REPORT_FILENAME};
use hiring_cost::workflows::hiring::{
    ContractType, CostEstimator, EstimateReport, HiringProfile, Region, SubsidyRules,
};
use rust_decimal::Decimal;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Gross annual salary in euro
    #[arg(long, value_parser = parse_salary)]
    pub(crate) salary: Decimal,
    /// Contract type: permanent, apprenticeship_professional or fixed_term
    #[arg(long, value_parser = parse_contract, default_value = "permanent")]
    pub(crate) contract: ContractType,
    /// Number of people employed by the company
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) employees: u32,
    /// Candidate age in years
    #[arg(
        long,
        default_value_t = 24,
        value_parser = clap::value_parser!(u8).range((MIN_CANDIDATE_AGE as i64)..=(MAX_CANDIDATE_AGE as i64))
    )]
    pub(crate) age: u8,
    /// Region of the workplace (slug or name, e.g. campania, "Emilia-Romagna")
    #[arg(long, value_parser = parse_region, default_value = "campania")]
    pub(crate) region: Region,
    /// The candidate is a woman
    #[arg(long)]
    pub(crate) female: bool,
    /// Months the candidate has been unemployed
    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=(MAX_MONTHS_UNEMPLOYED as i64))
    )]
    pub(crate) months_unemployed: u8,
    /// JSON rule set overriding the built-in 2025 rules
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Write the PDF report to this path (a directory receives the default file name)
    #[arg(long)]
    pub(crate) pdf: Option<PathBuf>,
    /// Print the estimate as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON rule set overriding the built-in 2025 rules
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let estimator = CostEstimator::new(load_rules(args.rules.clone())?);
    let profile = HiringProfile {
        gross_annual_salary: args.salary,
        contract_type: args.contract,
        company_employee_count: args.employees,
        candidate_age: args.age,
        region: args.region,
        is_female: args.female,
        months_unemployed: args.months_unemployed,
    };
    profile.validate()?;

    let estimate = estimator.estimate(&profile);
    let report = EstimateReport::new(&profile, &estimate);

    if args.json {
        let payload = json!({
            "profile": &profile,
            "estimate": &estimate,
            "summary": report.summary(),
        });
        println!("{payload:#}");
    } else {
        render_estimate(&profile, &report);
    }

    if let Some(target) = args.pdf {
        let path = if target.is_dir() {
            target.join(REPORT_FILENAME)
        } else {
            target
        };
        fs::write(&path, report.to_pdf())?;
        if !args.json {
            println!("\nPDF report written to {}", path.display());
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let estimator = CostEstimator::new(load_rules(args.rules)?);

    println!("Hiring cost estimator demo (2025 rules)");
    for (title, profile) in demo_profiles() {
        println!("\n=== {title} ===");
        let estimate = estimator.estimate(&profile);
        render_estimate(&profile, &EstimateReport::new(&profile, &estimate));
    }

    Ok(())
}

fn load_rules(path: Option<PathBuf>) -> Result<SubsidyRules, AppError> {
    match path {
        Some(path) => Ok(SubsidyRules::from_path(path)?),
        None => Ok(AppConfig::load()?.rules.resolve()?),
    }
}

fn render_estimate(profile: &HiringProfile, report: &EstimateReport<'_>) {
    let summary = report.summary();

    println!(
        "Profile: {} | salary €{} | {} employees | {}{}",
        profile.summary_line(),
        profile.gross_annual_salary,
        profile.company_employee_count,
        profile.region.label(),
        if profile.is_female {
            format!(" | female, {} months unemployed", profile.months_unemployed)
        } else {
            String::new()
        }
    );
    println!("- Gross cost: {}", format_currency(summary.gross_cost));
    println!(
        "- Total subsidy: {} ({} of gross)",
        format_currency(summary.total_subsidy),
        summary.subsidy_pct_label
    );
    println!("- Net real cost: {}", format_currency(summary.net_cost));

    if summary.items.is_empty() {
        println!("Detailed analysis: no subsidies apply");
        return;
    }

    println!("Detailed analysis");
    for item in &summary.items {
        let note = if item.counted {
            ""
        } else {
            " (not cumulative, excluded from total)"
        };
        println!("  - {}{}", item.description, note);
    }
}

fn demo_profiles() -> Vec<(&'static str, HiringProfile)> {
    let base = HiringProfile {
        gross_annual_salary: Decimal::from(25_000),
        contract_type: ContractType::Permanent,
        company_employee_count: 5,
        candidate_age: 24,
        region: Region::Campania,
        is_female: false,
        months_unemployed: 0,
    };

    vec![
        ("Young permanent hire in the south", base.clone()),
        (
            "Apprentice in a micro business",
            HiringProfile {
                gross_annual_salary: Decimal::from(20_000),
                contract_type: ContractType::ApprenticeshipProfessional,
                candidate_age: 19,
                ..base.clone()
            },
        ),
        (
            "Apprentice in a larger company",
            HiringProfile {
                gross_annual_salary: Decimal::from(30_000),
                contract_type: ContractType::ApprenticeshipProfessional,
                company_employee_count: 20,
                region: Region::Lombardia,
                ..base.clone()
            },
        ),
        (
            "Long-term unemployed woman in Lazio",
            HiringProfile {
                candidate_age: 40,
                region: Region::Lazio,
                is_female: true,
                months_unemployed: 24,
                ..base.clone()
            },
        ),
        (
            "Young woman in Veneto, bonuses not cumulative",
            HiringProfile {
                candidate_age: 29,
                region: Region::Veneto,
                is_female: true,
                months_unemployed: 24,
                ..base.clone()
            },
        ),
        (
            "Fixed-term contract",
            HiringProfile {
                contract_type: ContractType::FixedTerm,
                region: Region::Other,
                ..base
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profiles_are_within_collection_bounds() {
        for (title, profile) in demo_profiles() {
            assert_eq!(profile.validate(), Ok(()), "{title} must be valid");
        }
    }

    #[test]
    fn demo_covers_every_contract_type() {
        let profiles = demo_profiles();
        for contract in ContractType::ALL {
            assert!(profiles
                .iter()
                .any(|(_, profile)| profile.contract_type == contract));
        }
    }

    #[test]
    fn demo_includes_a_non_cumulative_override() {
        let estimator = CostEstimator::default();
        assert!(demo_profiles()
            .iter()
            .any(|(_, profile)| estimator.estimate(profile).has_non_cumulative_override()));
    }
}
