//! HTTP route handlers.
//!
//! Each handler deserializes a snapshot, runs the pure validators on it and
//! returns the result. No state is kept between requests. Bodies that fail to
//! deserialize are answered with the same JSON error body as other failures.

use axum::{
    Json, Router,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, error, warn};

use crate::domain::{DayType, InstantComparison, Line, compare_instant};
use crate::validation::{
    LineReport, TimeValidation, validate_booking_arrangement, validate_day_type,
    validate_day_types, validate_passing_times,
};
use crate::wizard::{EditorControls, max_allowed_step_index, step_views, transition};

use super::dto::*;

/// Create the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/validate/line", post(validate_line))
        .route("/validate/passing-times", post(validate_times))
        .route("/validate/day-type", post(validate_one_day_type))
        .route("/validate/day-types", post(validate_all_day_types))
        .route("/validate/booking-arrangement", post(validate_booking))
        .route("/compare-instant", post(compare))
        .route("/wizard/transition", post(wizard_transition))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Full validation report for a line snapshot.
async fn validate_line(AppJson(line): AppJson<Line>) -> Json<LineReport> {
    let report = LineReport::for_line(&line);
    debug!(
        valid = report.valid_line,
        max_step = report.max_allowed_step_index,
        "validated line"
    );
    Json(report)
}

async fn validate_times(AppJson(req): AppJson<PassingTimesRequest>) -> Json<TimeValidation> {
    Json(validate_passing_times(&req.passing_times))
}

async fn validate_one_day_type(
    AppJson(day_type): AppJson<DayType>,
) -> Json<ValidityResponse> {
    Json(ValidityResponse {
        is_valid: validate_day_type(&day_type),
    })
}

async fn validate_all_day_types(
    AppJson(day_types): AppJson<Vec<DayType>>,
) -> Json<ValidityResponse> {
    Json(ValidityResponse {
        is_valid: validate_day_types(&day_types),
    })
}

async fn validate_booking(
    AppJson(req): AppJson<BookingArrangementRequest>,
) -> Json<ValidityResponse> {
    Json(ValidityResponse {
        is_valid: validate_booking_arrangement(req.booking_arrangement.as_ref()),
    })
}

async fn compare(AppJson(req): AppJson<CompareInstantRequest>) -> Json<InstantComparison> {
    Json(compare_instant(
        req.time_a.as_deref(),
        req.offset_a,
        req.time_b.as_deref(),
        req.offset_b,
    ))
}

/// Apply a navigation event and return the derived wizard view.
async fn wizard_transition(
    AppJson(req): AppJson<TransitionRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    if req.in_use && !req.line.is_persisted() {
        return Err(AppError::BadRequest {
            message: "a line without an id cannot be in use".to_string(),
        });
    }

    let state = transition(req.state, req.event, &req.line);
    let in_use = req.in_use;
    let controls = EditorControls::derive(&req.line, &|_: &str| in_use, req.in_flight);

    Ok(Json(TransitionResponse {
        state,
        max_allowed_step_index: max_allowed_step_index(&req.line),
        steps: step_views(state, &req.line),
        controls,
    }))
}

/// JSON body extractor whose rejections are reported as [`AppError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
struct AppJson<T>(T);

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        if rejection.status().is_server_error() {
            AppError::Internal { message }
        } else {
            AppError::BadRequest { message }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use crate::domain::PassingTime;
    use crate::validation::TemporalErrorKind;
    use crate::wizard::{Step, WizardEvent, WizardState};

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn blank_line_report() {
        let Json(report) = validate_line(AppJson(Line::new_blank())).await;
        assert!(!report.valid_line);
        assert_eq!(report.max_allowed_step_index, 0);
        assert_eq!(report.journey_patterns.len(), 1);
    }

    #[tokio::test]
    async fn passing_times_endpoint() {
        let req = PassingTimesRequest {
            passing_times: vec![PassingTime::departing("08:00:00", 0)],
        };
        let Json(result) = validate_times(AppJson(req)).await;
        assert_eq!(result.error_kind, Some(TemporalErrorKind::InsufficientStops));
    }

    #[tokio::test]
    async fn booking_endpoint_accepts_absent_arrangement() {
        let req: BookingArrangementRequest = serde_json::from_str("{}").unwrap();
        let Json(result) = validate_booking(AppJson(req)).await;
        assert_eq!(result, ValidityResponse { is_valid: true });

        let req: BookingArrangementRequest =
            serde_json::from_str(r#"{"bookingArrangement":{}}"#).unwrap();
        let Json(result) = validate_booking(AppJson(req)).await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn compare_endpoint() {
        let req: CompareInstantRequest = serde_json::from_str(
            r#"{"timeA":"23:00:00","offsetA":0,"timeB":"01:00:00","offsetB":1}"#,
        )
        .unwrap();
        let Json(cmp) = compare(AppJson(req)).await;
        assert!(cmp.before);
        assert!(!cmp.after);
    }

    #[tokio::test]
    async fn transition_blocked_on_blank_line() {
        let req = TransitionRequest {
            state: WizardState::default(),
            event: WizardEvent::GoTo(Step::Review),
            line: Line::new_blank(),
            in_use: false,
            in_flight: false,
        };
        let Json(resp) = wizard_transition(AppJson(req)).await.unwrap();
        assert_eq!(resp.state.current_step, Step::About);
        assert_eq!(resp.max_allowed_step_index, 0);
        assert_eq!(resp.steps.len(), 4);
        assert!(!resp.controls.save_enabled);
        assert!(!resp.controls.delete_enabled);
    }

    #[tokio::test]
    async fn transition_rejects_in_use_new_line() {
        let req = TransitionRequest {
            state: WizardState::default(),
            event: WizardEvent::Next,
            line: Line::new_blank(),
            in_use: true,
            in_flight: false,
        };
        let err = wizard_transition(AppJson(req)).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    async fn error_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_snapshot_gets_json_error() {
        let err = AppJson::<Line>::from_request(json_request(r#"{"name": 3"#), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }

    #[tokio::test]
    async fn wrongly_typed_snapshot_gets_json_error() {
        let err = AppJson::<Line>::from_request(json_request(r#"{"name": 3}"#), &())
            .await
            .err()
            .unwrap();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();
        let err = AppJson::<Line>::from_request(req, &()).await.err().unwrap();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn internal_error_response() {
        let response = AppError::Internal {
            message: "boom".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_body(response).await["error"], "boom");
    }
}
