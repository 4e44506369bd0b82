use super::super::domain::SubsidyKind;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubsidyLineView {
    pub kind: SubsidyKind,
    pub label: String,
    pub amount: i64,
    pub counted: bool,
    pub description: String,
}

/// Whole-unit summary shown on screen and returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateSummaryView {
    pub gross_cost: i64,
    pub total_subsidy: i64,
    pub net_cost: i64,
    pub subsidy_pct: Option<i64>,
    pub subsidy_pct_label: String,
    pub non_cumulative_override: bool,
    pub items: Vec<SubsidyLineView>,
}

/// Euro amount with thousands separators, e.g. `€25,000`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

pub fn format_pct(pct: Option<i64>) -> String {
    match pct {
        Some(value) => format!("{value}%"),
        None => "N/A".to_string(),
    }
}
