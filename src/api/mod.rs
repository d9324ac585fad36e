use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    TripError, VERSION,
    models::{LocationIdentity, TripRequest, WeatherObservation},
    search::{LocationMatch, LocationSearch},
    trip::{Destination, TripPlan, TripPlanner},
    weather::CannedForecast,
};

/// Shared handler state
#[derive(Clone, Default)]
pub struct AppState {
    pub planner: TripPlanner,
    pub search: LocationSearch,
}

impl AppState {
    #[must_use]
    pub fn new(planner: TripPlanner, search: LocationSearch) -> Self {
        Self { planner, search }
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct ItineraryRequest {
    #[serde(default)]
    pub location: Option<LocationIdentity>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Per-day weather supplied by the caller instead of the synthetic forecast
    #[serde(default)]
    pub weather: Option<Vec<WeatherObservation>>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Error wrapper rendering a [`TripError`] as a JSON response
pub struct ApiError(TripError);

impl From<TripError> for ApiError {
    fn from(error: TripError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TripError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TripError::NoRecommendationsAvailable { .. } => StatusCode::NOT_FOUND,
            e if e.is_user_correctable() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("Request failed: {}", self.0);
        }
        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
        .route("/recommendations", post(recommendations))
        .route("/itinerary", post(itinerary))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<LocationMatch>> {
    Json(state.search.search(&params.q))
}

async fn recommendations(
    State(state): State<AppState>,
    payload: Result<Json<LocationIdentity>, JsonRejection>,
) -> Result<Json<Destination>, ApiError> {
    let Json(identity) = payload?;
    let destination = state.planner.recommend(Some(&identity)).await?;
    Ok(Json(destination))
}

async fn itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, ApiError> {
    let Json(body) = payload?;
    if body.location.is_none() {
        return Err(TripError::MissingLocation.into());
    }
    let request = TripRequest::parse(body.start_date.as_deref(), body.end_date.as_deref())?;

    let planner = match body.weather {
        Some(weather) if !weather.is_empty() => state
            .planner
            .clone()
            .with_weather(Arc::new(CannedForecast::new(weather))),
        _ => state.planner,
    };

    let plan = planner.plan_trip(body.location.as_ref(), request).await?;
    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = router(AppState::default()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_itinerary_missing_location_is_bad_request() {
        let body = json!({"start_date": "2025-06-01", "end_date": "2025-06-03"});
        let (status, body) = call(post_json("/itinerary", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "MissingLocation");
    }

    #[tokio::test]
    async fn test_itinerary_missing_dates_is_bad_request() {
        let body = json!({"location": {"name": "Japan"}, "start_date": "2025-06-01"});
        let (status, body) = call(post_json("/itinerary", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation");
        assert!(body["message"].as_str().unwrap().contains("both start and end dates"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, body) = call(post_json("/recommendations", &json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation");
        assert!(body["message"].as_str().unwrap().contains("name"));

        let request = Request::post("/itinerary")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation");
    }

    #[tokio::test]
    async fn test_itinerary_uses_supplied_weather() {
        let body = json!({
            "location": {"kind": "city", "name": "Tokyo", "country": "Japan"},
            "start_date": "2025-06-01",
            "end_date": "2025-06-03",
            "weather": [{"condition": "rainy", "temperature": 11}]
        });
        let (status, body) = call(post_json("/itinerary", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let days = body["itinerary"]["days"].as_array().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0]["weather"]["condition"], "rainy");
        assert_eq!(days[0]["weather"]["temperature"], 11);
        // day two is beyond the supplied list
        assert_eq!(days[1]["weather"]["temperature"], 20);
    }
}
