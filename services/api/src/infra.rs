use crate::page::PageRenderer;
use hiring_cost::workflows::hiring::{ContractType, CostEstimator, HiringProfile, Region};
use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) estimator: Arc<CostEstimator>,
    pub(crate) pages: Arc<PageRenderer>,
}

/// Query-string shape of the HTML form. Field names match the `<input>` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ProfileForm {
    pub(crate) salary: Decimal,
    pub(crate) contract: ContractType,
    pub(crate) employees: u32,
    pub(crate) age: u8,
    pub(crate) region: Region,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub(crate) female: bool,
    #[serde(default)]
    pub(crate) months_unemployed: u8,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            salary: Decimal::from(25_000),
            contract: ContractType::Permanent,
            employees: 5,
            age: 24,
            region: Region::Campania,
            female: false,
            months_unemployed: 0,
        }
    }
}

impl ProfileForm {
    pub(crate) fn profile(&self) -> HiringProfile {
        HiringProfile {
            gross_annual_salary: self.salary,
            contract_type: self.contract,
            company_employee_count: self.employees,
            candidate_age: self.age,
            region: self.region,
            is_female: self.female,
            months_unemployed: self.months_unemployed,
        }
    }

    /// Re-encodes the form so links can carry the same inputs.
    pub(crate) fn query_string(&self) -> String {
        let mut query = format!(
            "salary={}&contract={}&employees={}&age={}&region={}&months_unemployed={}",
            self.salary,
            self.contract.slug(),
            self.employees,
            self.age,
            self.region.slug(),
            self.months_unemployed
        );
        if self.female {
            query.push_str("&female=on");
        }
        query
    }
}

fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(str::trim),
        Some("on" | "true" | "1" | "yes")
    ))
}

pub(crate) fn parse_salary(raw: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|err| format!("failed to parse '{raw}' as a decimal amount ({err})"))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("salary must not be negative (got {raw})"));
    }
    Ok(value)
}

pub(crate) fn parse_contract(raw: &str) -> Result<ContractType, String> {
    ContractType::parse(raw).ok_or_else(|| {
        let options: Vec<&str> = ContractType::ALL.iter().map(|c| c.slug()).collect();
        format!("unknown contract '{raw}' (expected one of {})", options.join(", "))
    })
}

pub(crate) fn parse_region(raw: &str) -> Result<Region, String> {
    Region::parse(raw).ok_or_else(|| format!("unknown region '{raw}'"))
}
