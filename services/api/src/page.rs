use crate::infra::ProfileForm;
use hiring_cost::error::AppError;
use hiring_cost::workflows::hiring::domain::{
    MAX_CANDIDATE_AGE, MAX_MONTHS_UNEMPLOYED, MIN_CANDIDATE_AGE, MIN_EMPLOYEE_COUNT,
};
use hiring_cost::workflows::hiring::report::{format_currency, SubsidyLineView};
use hiring_cost::workflows::hiring::{ContractType, EstimateSummaryView, Region};
use serde::Serialize;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = "estimate.html";

/// What to show beneath the form.
pub(crate) enum PageOutcome<'a> {
    Empty,
    Estimate(&'a EstimateSummaryView),
    Invalid(String),
}

/// Renders the estimator page. The template name ends in `.html`, so tera
/// escapes every interpolated value.
pub(crate) struct PageRenderer {
    tera: Tera,
}

#[derive(Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct FieldBounds {
    min_employees: u32,
    min_age: u8,
    max_age: u8,
    max_months_unemployed: u8,
}

#[derive(Serialize)]
struct ResultsView<'a> {
    gross_cost: String,
    total_subsidy: String,
    net_cost: String,
    subsidy_pct: &'a str,
    subsidy_pct_known: bool,
    items: &'a [SubsidyLineView],
    report_query: String,
}

impl PageRenderer {
    pub(crate) fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../templates/estimate.html"))?;
        Ok(Self { tera })
    }

    pub(crate) fn render(
        &self,
        form: &ProfileForm,
        outcome: PageOutcome<'_>,
    ) -> Result<String, AppError> {
        let context = page_context(form, &outcome);
        self.tera
            .render(PAGE_TEMPLATE, &context)
            .map_err(|err| AppError::Render(Box::new(err)))
    }
}

fn page_context(form: &ProfileForm, outcome: &PageOutcome<'_>) -> Context {
    let contracts: Vec<SelectOption> = ContractType::ALL
        .into_iter()
        .map(|contract| SelectOption {
            value: contract.slug(),
            label: contract.label(),
            selected: contract == form.contract,
        })
        .collect();
    let regions: Vec<SelectOption> = Region::ALL
        .into_iter()
        .map(|region| SelectOption {
            value: region.slug(),
            label: region.label(),
            selected: region == form.region,
        })
        .collect();

    let mut context = Context::new();
    context.insert("form", form);
    context.insert("contracts", &contracts);
    context.insert("regions", &regions);
    context.insert(
        "bounds",
        &FieldBounds {
            min_employees: MIN_EMPLOYEE_COUNT,
            min_age: MIN_CANDIDATE_AGE,
            max_age: MAX_CANDIDATE_AGE,
            max_months_unemployed: MAX_MONTHS_UNEMPLOYED,
        },
    );

    let (error, results) = match outcome {
        PageOutcome::Empty => (None, None),
        PageOutcome::Invalid(message) => (Some(message.as_str()), None),
        PageOutcome::Estimate(summary) => (
            None,
            Some(ResultsView {
                gross_cost: format_currency(summary.gross_cost),
                total_subsidy: format_currency(summary.total_subsidy),
                net_cost: format_currency(summary.net_cost),
                subsidy_pct: &summary.subsidy_pct_label,
                subsidy_pct_known: summary.subsidy_pct.is_some(),
                items: &summary.items,
                report_query: form.query_string(),
            }),
        ),
    };
    context.insert("error", &error);
    context.insert("results", &results);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiring_cost::workflows::hiring::{estimate, EstimateReport};

    fn renderer() -> PageRenderer {
        PageRenderer::new().expect("page template parses")
    }

    #[test]
    fn empty_page_offers_every_region() {
        let html = renderer()
            .render(&ProfileForm::default(), PageOutcome::Empty)
            .expect("page renders");
        for region in Region::ALL {
            assert!(html.contains(&format!("value=\"{}\"", region.slug())));
        }
        assert!(html.contains("<option value=\"campania\" selected>"));
        assert!(html.contains("Valle d&#x27;Aosta"));
        assert!(html.contains("Fill in the profile"));
    }

    #[test]
    fn invalid_outcome_is_escaped() {
        let html = renderer()
            .render(
                &ProfileForm::default(),
                PageOutcome::Invalid("<age> out of range".to_string()),
            )
            .expect("page renders");
        assert!(html.contains("&lt;age&gt; out of range"));
        assert!(!html.contains("<age>"));
    }

    #[test]
    fn estimate_lists_items_and_escapes_labels() {
        let form = ProfileForm {
            contract: ContractType::ApprenticeshipProfessional,
            salary: 20_000.into(),
            ..ProfileForm::default()
        };
        let profile = form.profile();
        let result = estimate(&profile);
        let summary = EstimateReport::new(&profile, &result).summary();

        let html = renderer()
            .render(&form, PageOutcome::Estimate(&summary))
            .expect("page renders");
        assert!(html.contains("Apprenticeship relief, &lt;9 employees: €5040"));
        assert!(html.contains("€26,000"));
        assert!(html.contains("23%"));
        assert!(html.contains("contract=apprenticeship_professional&amp;employees=5"));
        assert!(!html.contains("No subsidies apply"));
    }

    #[test]
    fn unknown_percentage_renders_na() {
        let form = ProfileForm {
            contract: ContractType::FixedTerm,
            salary: 0.into(),
            ..ProfileForm::default()
        };
        let profile = form.profile();
        let result = estimate(&profile);
        let summary = EstimateReport::new(&profile, &result).summary();

        let html = renderer()
            .render(&form, PageOutcome::Estimate(&summary))
            .expect("page renders");
        assert!(html.contains("<span>N/A</span>"));
        assert!(html.contains("No subsidies apply to this contract."));
    }
}
