//! HTTP API for the Uranai engines.

use crate::analysis::{analyze, AnalysisData};
use crate::config::ServerConfig;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use uranai_flower::FlowerFortune;
use uranai_numerology::{
    check_law, BirthDate, CellGrid, CosmicRhythm, LawCheckResult, NumerologyGrid, OuterRing,
    SpecialNumbers,
};

/// Shared application state.
pub struct AppState {
    pub config: ServerConfig,
    pub http: reqwest::Client,
}

impl AppState {
    /// Create state from config with a fresh HTTP client.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Build the API router.
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS layer for browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/numerology", post(numerology))
        .route("/api/v1/flower", post(flower))
        .route("/api/v1/numerology-analysis", post(numerology_analysis))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

// --- Engine endpoints ---

/// Birth-date request body. Calendar validity is deliberately not checked;
/// only the digit values feed the engines.
#[derive(Debug, Deserialize)]
struct BirthDateRequest {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NumerologyResponse {
    grid: CellGrid,
    outer: OuterRing,
    special_numbers: SpecialNumbers,
    law_check: LawCheckResult,
}

async fn numerology(Json(req): Json<BirthDateRequest>) -> Json<NumerologyResponse> {
    let grid = NumerologyGrid::from_birth_date(BirthDate::new(req.year, req.month, req.day));
    let law_check = check_law(&grid);
    Json(NumerologyResponse {
        grid: grid.grid,
        outer: grid.outer,
        special_numbers: grid.special_numbers(),
        law_check,
    })
}

async fn flower(Json(req): Json<BirthDateRequest>) -> Json<FlowerFortune> {
    Json(FlowerFortune::from_birth_date(BirthDate::new(
        req.year, req.month, req.day,
    )))
}

// --- Analysis endpoint ---

/// Required numeric fields, checked in this order; the first missing or
/// non-numeric one names the 400 response.
const REQUIRED_FIELDS: [&str; 6] = [
    "mainNumber",
    "pastNumber",
    "futureNumber",
    "spiritNumber",
    "higherPurposeNumber",
    "higherGoalNumber",
];

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    analysis: String,
    timestamp: String,
}

type FieldError = (StatusCode, Json<ErrorBody>);

fn require_number(body: &Value, field: &str) -> Result<u32, FieldError> {
    body.get(field)
        .and_then(Value::as_u64)
        .map(|n| n as u32)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: format!("Missing or invalid field: {field}"),
                }),
            )
        })
}

async fn numerology_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<AnalysisResponse>, FieldError> {
    let mut numbers = [0u32; 6];
    for (slot, field) in numbers.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = require_number(&body, field)?;
    }
    let [main, past, future, spirit, higher_purpose, higher_goal] = numbers;

    // Optional; an unparsable rhythm object is treated as absent.
    let cosmic_rhythm: Option<CosmicRhythm> = body
        .get("cosmicRhythm")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok());

    let data = AnalysisData {
        main_number: main,
        past_number: past,
        future_number: future,
        spirit_number: spirit,
        higher_purpose_number: higher_purpose,
        higher_goal_number: higher_goal,
        cosmic_rhythm,
    };

    let analysis = analyze(&state, &data).await;

    Ok(Json(AnalysisResponse {
        analysis,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = ServerConfig {
            api_addr: "127.0.0.1:0".parse().unwrap(),
            persona: crate::prompt::Persona::Warm,
            ai: None,
        };
        build_router(Arc::new(AppState::new(config)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn numerology_returns_full_figure() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/numerology",
                json!({ "year": 1990, "month": 1, "day": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["grid"]["center"], 3);
        assert_eq!(body["specialNumbers"]["mainNumber"], 3);
        assert_eq!(body["outer"]["topBar"], 3);
        assert_eq!(body["lawCheck"]["isValid"], true);
        assert_eq!(body["lawCheck"]["cosmicRhythm"]["number"], 9);
    }

    #[tokio::test]
    async fn flower_returns_reading() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/flower",
                json!({ "year": 1990, "month": 1, "day": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["flower"], "sakura");
        assert_eq!(body["temperament"], "gentle");
        assert!(body["personality"]["title"].as_str().unwrap().contains("Cherry Blossom"));
    }

    #[tokio::test]
    async fn analysis_rejects_missing_field_by_name() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/numerology-analysis",
                json!({
                    "mainNumber": 3,
                    "pastNumber": 1,
                    "futureNumber": 2,
                    // spiritNumber missing
                    "higherPurposeNumber": 3,
                    "higherGoalNumber": 6
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("spiritNumber"));
    }

    #[tokio::test]
    async fn analysis_rejects_non_numeric_field() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/numerology-analysis",
                json!({
                    "mainNumber": "three",
                    "pastNumber": 1,
                    "futureNumber": 2,
                    "spiritNumber": 6,
                    "higherPurposeNumber": 3,
                    "higherGoalNumber": 6
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("mainNumber"));
    }

    #[tokio::test]
    async fn analysis_with_ai_disabled_serves_fallback_with_titles() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/numerology-analysis",
                json!({
                    "mainNumber": 3,
                    "pastNumber": 1,
                    "futureNumber": 2,
                    "spiritNumber": 6,
                    "higherPurposeNumber": 11,
                    "higherGoalNumber": 9
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let analysis = body["analysis"].as_str().unwrap();
        for title in [
            "Joy of Creation",
            "Primal Light",
            "Bridge of Harmony",
            "Tuner of Love",
            "Messenger of Light",
            "Sage of the Cosmos",
        ] {
            assert!(analysis.contains(title), "missing title: {title}");
        }
        assert!(!body["timestamp"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn analysis_accepts_optional_cosmic_rhythm() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/numerology-analysis",
                json!({
                    "mainNumber": 3,
                    "pastNumber": 1,
                    "futureNumber": 2,
                    "spiritNumber": 6,
                    "higherPurposeNumber": 3,
                    "higherGoalNumber": 6,
                    "cosmicRhythm": {
                        "number": 9,
                        "focus": "Focus on unity with cosmic consciousness",
                        "action": "",
                        "description": "",
                        "earthMission": "",
                        "startingPoint": "",
                        "caution": ""
                    }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["analysis"]
            .as_str()
            .unwrap()
            .contains("cosmic rhythm energy 9"));
    }
}
