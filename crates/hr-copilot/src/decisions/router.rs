use super::{DecisionError, DecisionService, Lookup, StrategicRequest};
use crate::actions::{execute_comprehensive_action_plan, ActionInputs};
use crate::engagement::EngagementLevel;
use crate::error::AppError;
use crate::facts::{EmployeeId, FactStore};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub fn decision_router<S>(service: Arc<DecisionService<S>>) -> Router
where
    S: FactStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees/:employee_id/assessment",
            get(assessment_handler::<S>),
        )
        .route("/api/v1/employees/:employee_id/plan", get(plan_handler::<S>))
        .route(
            "/api/v1/employees/:employee_id/triage",
            get(triage_handler::<S>),
        )
        .route(
            "/api/v1/organization/analytics",
            get(analytics_handler::<S>),
        )
        .route("/api/v1/decisions", post(decision_handler::<S>))
        .route("/api/v1/actions/report", post(action_report_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmployeeQuery {
    #[serde(default)]
    pub(crate) engagement: Option<EngagementLevel>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DateQuery {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionReportRequest {
    pub(crate) employee_id: EmployeeId,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
    #[serde(flatten)]
    pub(crate) inputs: ActionInputs,
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

fn lookup_response<T: Serialize>(outcome: Result<Lookup<T>, DecisionError>) -> Response {
    match outcome {
        Ok(lookup) => {
            let status = if lookup.is_found() {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            (status, Json(lookup)).into_response()
        }
        Err(error) => failure_response(error),
    }
}

fn failure_response(error: DecisionError) -> Response {
    warn!(%error, "decision request failed");
    AppError::from(error).into_response()
}

pub(crate) async fn assessment_handler<S>(
    State(service): State<Arc<DecisionService<S>>>,
    Path(employee_id): Path<String>,
    Query(query): Query<EmployeeQuery>,
) -> Response
where
    S: FactStore + 'static,
{
    let id = EmployeeId::new(employee_id);
    lookup_response(service.comprehensive_assessment(
        &id,
        query.engagement,
        resolve_today(query.today),
    ))
}

pub(crate) async fn plan_handler<S>(
    State(service): State<Arc<DecisionService<S>>>,
    Path(employee_id): Path<String>,
    Query(query): Query<EmployeeQuery>,
) -> Response
where
    S: FactStore + 'static,
{
    let id = EmployeeId::new(employee_id);
    lookup_response(service.create_action_plan(&id, query.engagement, resolve_today(query.today)))
}

pub(crate) async fn triage_handler<S>(
    State(service): State<Arc<DecisionService<S>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    S: FactStore + 'static,
{
    lookup_response(service.triage(&EmployeeId::new(employee_id)))
}

pub(crate) async fn analytics_handler<S>(
    State(service): State<Arc<DecisionService<S>>>,
    Query(query): Query<DateQuery>,
) -> Response
where
    S: FactStore + 'static,
{
    match service.organizational_analytics(resolve_today(query.today)) {
        Ok(analytics) => (StatusCode::OK, Json(analytics)).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn decision_handler<S>(
    State(service): State<Arc<DecisionService<S>>>,
    Query(query): Query<DateQuery>,
    Json(request): Json<StrategicRequest>,
) -> Response
where
    S: FactStore + 'static,
{
    lookup_response(service.strategic_decision(&request, resolve_today(query.today)))
}

pub(crate) async fn action_report_handler(Json(request): Json<ActionReportRequest>) -> Response {
    let report = execute_comprehensive_action_plan(
        &request.employee_id,
        &request.inputs,
        resolve_today(request.today),
    );
    (StatusCode::OK, Json(report)).into_response()
}
