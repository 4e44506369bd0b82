mod document;
pub mod views;

pub use document::{ReportDocument, REPORT_DISCLAIMER, REPORT_FILENAME, REPORT_TITLE};
pub use views::{format_currency, format_pct, EstimateSummaryView, SubsidyLineView};

use super::domain::{whole_units, CostEstimate, HiringProfile, SubsidyLineItem};

pub const REPORT_MIME: mime::Mime = mime::APPLICATION_PDF;

/// Presentation of one estimate for screen and document output.
#[derive(Debug, Clone)]
pub struct EstimateReport<'a> {
    profile: &'a HiringProfile,
    estimate: &'a CostEstimate,
}

impl<'a> EstimateReport<'a> {
    pub fn new(profile: &'a HiringProfile, estimate: &'a CostEstimate) -> Self {
        Self { profile, estimate }
    }

    pub fn summary(&self) -> EstimateSummaryView {
        let subsidy_pct = self.estimate.subsidy_pct_of_gross();
        EstimateSummaryView {
            gross_cost: whole_units(self.estimate.gross_cost),
            total_subsidy: whole_units(self.estimate.total_subsidy),
            net_cost: whole_units(self.estimate.net_cost),
            subsidy_pct,
            subsidy_pct_label: format_pct(subsidy_pct),
            non_cumulative_override: self.estimate.has_non_cumulative_override(),
            items: self.estimate.items.iter().map(line_view).collect(),
        }
    }

    /// `<label>: €<whole amount>` for each item, in evaluation order.
    pub fn item_descriptions(&self) -> Vec<String> {
        self.estimate.items.iter().map(describe_item).collect()
    }

    pub fn document(&self) -> ReportDocument {
        let lines = vec![
            ("Profile", self.profile.summary_line()),
            (
                "Salary",
                format!("€{}", whole_units(self.profile.gross_annual_salary)),
            ),
            ("Region", self.profile.region.label().to_string()),
            (
                "Gross annual cost",
                format!("€{}", whole_units(self.estimate.gross_cost)),
            ),
            (
                "Annual subsidy",
                format!("€{}", whole_units(self.estimate.total_subsidy)),
            ),
            (
                "Net company cost",
                format!("€{}", whole_units(self.estimate.net_cost)),
            ),
            ("Details", self.item_descriptions().join(" / ")),
        ];

        ReportDocument {
            title: REPORT_TITLE.to_string(),
            lines: lines
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            disclaimer: REPORT_DISCLAIMER.to_string(),
        }
    }

    pub fn to_pdf(&self) -> Vec<u8> {
        self.document().to_pdf()
    }
}

fn describe_item(item: &SubsidyLineItem) -> String {
    format!("{}: €{}", item.label, whole_units(item.amount))
}

fn line_view(item: &SubsidyLineItem) -> SubsidyLineView {
    SubsidyLineView {
        kind: item.kind,
        label: item.label.clone(),
        amount: whole_units(item.amount),
        counted: item.counted,
        description: describe_item(item),
    }
}
