use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use rainwise::assessment::{
    AssessmentRequest, CategoryDefinition, CategoryRecommendation, FeasibilityReport,
};
use rainwise::error::AppError;
use rainwise::regions::{RegionImporter, RegionalSummary};
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) report: FeasibilityReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryCatalog {
    pub(crate) total: usize,
    pub(crate) categories: Vec<CategoryDefinition>,
}

pub(crate) fn assessment_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/categories", get(categories_endpoint))
        .route(
            "/api/v1/categories/recommend",
            post(recommendation_endpoint),
        )
        .route("/api/v1/assessments", post(assessment_endpoint))
        .route("/api/v1/regions/categories", post(regions_endpoint))
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

pub(crate) async fn categories_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<CategoryCatalog> {
    let categories = state.assessor.engine().registry().categories().to_vec();
    Json(CategoryCatalog {
        total: categories.len(),
        categories,
    })
}

/// Rejected bodies surface as [`AppError::InvalidRequest`] with the extractor's status.
pub(crate) async fn assessment_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Json(request) = payload?;
    let report = state.assessor.assess_request(&request);

    info!(
        category = %report.primary.category.id,
        feasibility = report.feasibility_percentage(),
        "assessment served"
    );

    Ok(Json(AssessmentResponse {
        generated_at: Utc::now(),
        report,
    }))
}

pub(crate) async fn recommendation_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<CategoryRecommendation>, AppError> {
    let Json(request) = payload?;
    let recommendation = state
        .assessor
        .engine()
        .recommend(&request.site, request.preferences.as_ref());
    Ok(Json(recommendation))
}

pub(crate) async fn regions_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<Json<RegionalSummary>, AppError> {
    let summary = RegionImporter::new(state.assessor.engine()).classify_reader(body.as_bytes())?;
    info!(regions = summary.regions.len(), "regional classification served");
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use rainwise::assessment::{CategoryId, FeasibilityAssessor};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const HOUSEHOLD_REQUEST: &str = r#"{
        "site": {
            "roof_area_m2": 100,
            "rainfall_mm_per_year": 800,
            "roof_type": "concrete",
            "household_size": 4
        }
    }"#;

    const REGIONS_CSV: &str = "\
Region_Name,State,Latitude,Longitude,Rainfall_mm,Soil_Type,Aquifer_Type,Infiltration_Rate_mm_per_hr,Groundwater_Depth_m
Jaisalmer,Rajasthan,26.9157,70.9083,210,Sandy,Unconfined,30,40
Coimbatore,Tamil Nadu,11.0168,76.9558,700,Loamy,Hard Rock,12,6
";

    fn household_request() -> Result<Json<AssessmentRequest>, JsonRejection> {
        let request = serde_json::from_str(HOUSEHOLD_REQUEST).expect("request parses");
        Ok(Json(request))
    }

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            assessor: Arc::new(FeasibilityAssessor::standard()),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = readiness_endpoint(Extension(test_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(test_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn assessment_endpoint_returns_a_timestamped_report() {
        let before = Utc::now();
        let Json(body) =
            assessment_endpoint(Extension(test_state(true)), household_request())
                .await
                .expect("assessment succeeds");

        assert!(body.generated_at >= before);
        assert_eq!(body.report.primary.category.id, CategoryId(2));
        assert_eq!(body.report.harvesting_potential.annual_liters, 68_000.0);
        assert_eq!(body.report.alternatives.len(), 2);
    }

    #[tokio::test]
    async fn rejected_bodies_return_json_errors() {
        let cases = [
            (r#"{"site": {"roof": 100}}"#, StatusCode::UNPROCESSABLE_ENTITY),
            (r#"{"site": "#, StatusCode::BAD_REQUEST),
        ];

        for (raw, status) in cases {
            let response = assessment_routes()
                .layer(Extension(test_state(true)))
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/assessments")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(raw))
                        .expect("request builds"),
                )
                .await
                .expect("assessment responds");

            assert_eq!(response.status(), status, "body {raw}");
            let body = body_json(response).await;
            assert!(body["error"]
                .as_str()
                .is_some_and(|message| message.starts_with("invalid request body")));
        }
    }

    #[tokio::test]
    async fn recommendation_endpoint_lists_two_alternatives() {
        let Json(body) =
            recommendation_endpoint(Extension(test_state(true)), household_request())
                .await
                .expect("recommendation succeeds");

        assert_eq!(body.recommended_category.id, CategoryId(2));
        assert_eq!(body.alternative_categories.len(), 2);
        assert_eq!(body.recommendation_logic.total_categories_evaluated, 16);
        assert!(!body.recommendation_logic.user_preferences_considered);
    }

    #[tokio::test]
    async fn categories_endpoint_lists_the_catalog_in_order() {
        let Json(body) = categories_endpoint(Extension(test_state(true))).await;
        assert_eq!(body.total, 16);
        assert_eq!(body.categories[0].id, CategoryId(1));
        assert_eq!(body.categories[15].id, CategoryId(16));
    }

    #[tokio::test]
    async fn regions_endpoint_classifies_csv_bodies() {
        let Json(summary) = regions_endpoint(Extension(test_state(true)), REGIONS_CSV.to_string())
            .await
            .expect("csv classifies");

        assert_eq!(summary.regions.len(), 2);
        assert_eq!(summary.regions[0].region_name, "Jaisalmer");
        assert_eq!(summary.regions[0].category_id, CategoryId(1));
        assert_eq!(summary.regions[1].category_id, CategoryId(2));
        assert_eq!(summary.category_counts.len(), 16);
    }

    #[tokio::test]
    async fn router_serves_health_and_assessments() {
        let app = assessment_routes().layer(Extension(test_state(true)));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("health responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(HOUSEHOLD_REQUEST))
                    .expect("request builds"),
            )
            .await
            .expect("assessment responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["generated_at"].is_string());
        assert_eq!(body["report"]["primary"]["category"]["id"], json!(2));
        assert_eq!(body["report"]["demand"]["feasibility_label"], json!("Limited Feasible"));
    }
}
