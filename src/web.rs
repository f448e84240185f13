//! HTTP surface: the input form, the prediction route, and health endpoints.

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{error, info, warn};

use crate::app_state::AppState;
use crate::catalog;
use crate::features::{MeasurementForm, FEATURE_NAMES};

/// Build the full router: form UI, prediction, static assets, health checks.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/status", get(status))
        .nest_service("/static", static_files)
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// What the page template shows below the form.
enum PageOutcome {
    Prediction(catalog::Recommendation),
    Error(String),
}

async fn index() -> Html<String> {
    Html(render_page(None))
}

#[axum::debug_handler]
async fn predict(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<MeasurementForm>,
) -> Response {
    let features = match form.to_feature_vector() {
        Ok(features) => features,
        Err(err) => {
            warn!("rejected form submission: {err}");
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(Some(&PageOutcome::Error(err.to_string())))),
            )
                .into_response();
        }
    };

    match state.pipeline.predict(&features) {
        Ok(label) => {
            let recommendation = catalog::recommend(label);
            info!(label, crop = ?catalog::crop_name(label), "prediction served");
            Html(render_page(Some(&PageOutcome::Prediction(recommendation)))).into_response()
        }
        Err(err) => {
            // Shape mismatches here mean the deployed artifacts disagree
            // with each other, not that the user sent anything wrong.
            error!("inference failed: {err}");
            err.into_response()
        }
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readyz(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ready": true,
        "model_id": state.pipeline.model_id(),
    }))
}

async fn status(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "model_id": state.pipeline.model_id(),
        "classes": state.pipeline.class_count(),
        "features": FEATURE_NAMES,
    }))
}

/// Render the single page: the measurement form, plus the outcome block when
/// a prediction or input error is available.
fn render_page(outcome: Option<&PageOutcome>) -> String {
    let result_block = match outcome {
        Some(PageOutcome::Prediction(rec)) => format!(
            concat!(
                "<div class=\"result\">\n",
                "  <p>{}</p>\n",
                "  <img src=\"/static/{}\" alt=\"recommended crop\" width=\"220\">\n",
                "</div>\n"
            ),
            escape_html(&rec.message),
            escape_html(&rec.image_file),
        ),
        Some(PageOutcome::Error(message)) => format!(
            "<div class=\"result error\"><p>{}</p></div>\n",
            escape_html(message)
        ),
        None => String::new(),
    };

    let inputs: String = FEATURE_NAMES
        .iter()
        .map(|name| {
            format!(
                concat!(
                    "    <label for=\"{name}\">{name}</label>\n",
                    "    <input type=\"text\" id=\"{name}\" name=\"{name}\" required>\n"
                ),
                name = name
            )
        })
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <title>Cropcast - Crop Recommendation</title>\n",
            "</head>\n",
            "<body>\n",
            "  <h1>Crop Recommendation</h1>\n",
            "  <form action=\"/predict\" method=\"post\">\n",
            "{inputs}",
            "    <button type=\"submit\">Predict</button>\n",
            "  </form>\n",
            "{result}",
            "</body>\n",
            "</html>\n"
        ),
        inputs = inputs,
        result = result_block,
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
