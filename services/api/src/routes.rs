use crate::infra::{AppState, ProfileForm};
use crate::page::PageOutcome;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use hiring_cost::error::AppError;
use hiring_cost::workflows::hiring::report::{REPORT_FILENAME, REPORT_MIME};
use hiring_cost::workflows::hiring::{
    CostEstimate, EstimateReport, EstimateSummaryView, HiringProfile,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) profile: HiringProfile,
    pub(crate) estimate: CostEstimate,
    pub(crate) summary: EstimateSummaryView,
}

pub(crate) fn with_estimate_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/estimate", get(estimate_page))
        .route("/estimate/report.pdf", get(report_download))
        .route("/api/v1/estimate", post(estimate_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn form_page(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let html = state
        .pages
        .render(&ProfileForm::default(), PageOutcome::Empty)?;
    Ok(Html(html))
}

pub(crate) async fn estimate_page(
    Extension(state): Extension<AppState>,
    query: Result<Query<ProfileForm>, QueryRejection>,
) -> Result<Response, AppError> {
    let form = match query {
        Ok(Query(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "form query rejected");
            let html = state.pages.render(
                &ProfileForm::default(),
                PageOutcome::Invalid(rejection.body_text()),
            )?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let profile = form.profile();
    if let Err(violation) = profile.validate() {
        debug!(%violation, "form rejected");
        let html = state
            .pages
            .render(&form, PageOutcome::Invalid(violation.to_string()))?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    let estimate = state.estimator.estimate(&profile);
    let summary = EstimateReport::new(&profile, &estimate).summary();
    let html = state
        .pages
        .render(&form, PageOutcome::Estimate(&summary))?;
    Ok(Html(html).into_response())
}

pub(crate) async fn report_download(
    Extension(state): Extension<AppState>,
    query: Result<Query<ProfileForm>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(form) = match query {
        Ok(query) => query,
        Err(rejection) => {
            debug!(%rejection, "report query rejected");
            let body = Json(json!({ "error": rejection.body_text() }));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
        }
    };
    let profile = form.profile();
    profile.validate()?;

    let estimate = state.estimator.estimate(&profile);
    let pdf = EstimateReport::new(&profile, &estimate).to_pdf();
    debug!(bytes = pdf.len(), "pdf report rendered");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, REPORT_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

pub(crate) async fn estimate_endpoint(
    Extension(state): Extension<AppState>,
    Json(profile): Json<HiringProfile>,
) -> Result<Json<EstimateResponse>, AppError> {
    if let Err(violation) = profile.validate() {
        warn!(%violation, "estimate request rejected");
        return Err(violation.into());
    }

    let estimate = state.estimator.estimate(&profile);
    let summary = EstimateReport::new(&profile, &estimate).summary();

    Ok(Json(EstimateResponse {
        profile,
        estimate,
        summary,
    }))
}
