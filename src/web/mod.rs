//! HTTP 계층. 폼 페이지, 폼 제출, JSON API, 헬스체크를 제공한다.

pub mod page;

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::form::CalcForm;
use crate::network::{self, CalculationOutcome};

/// 라우터를 구성한다. 설정은 읽기 전용으로 공유된다.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .route("/api/calculate", post(api_calculate))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// `GET /` — 빈 폼.
async fn index(State(config): State<Arc<Config>>) -> Html<String> {
    Html(page::render(&CalcForm::default(), None, &config.dataset))
}

/// `POST /calculate` — 폼 제출을 계산하고 입력값을 채운 페이지를 돌려준다.
async fn calculate(
    State(config): State<Arc<Config>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let form = CalcForm::from_pairs(pairs);
    let outcome = network::calculate(&form);
    Html(page::render(&form, Some(&outcome), &config.dataset))
}

/// `POST /api/calculate` — 같은 계산을 JSON으로 돌려준다.
async fn api_calculate(Json(form): Json<CalcForm>) -> Json<CalculationOutcome> {
    Json(network::calculate(&form))
}

async fn healthz() -> &'static str {
    "ok"
}
