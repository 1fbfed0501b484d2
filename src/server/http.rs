use axum::{
  extract::State,
  http::{StatusCode, Uri},
  response::{IntoResponse, Response},
  routing::get,
  Router, TypedHeader,
};
use headers::{CacheControl, ContentType};
use metrics::increment_counter;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use super::assets::{self, Asset};

#[derive(Clone, Default)]
pub struct AppState {
  pub metrics: Option<PrometheusHandle>,
}

pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/healthz", get(healthz))
    .route("/metrics", get(render_metrics))
    .fallback(static_file)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn healthz() -> &'static str {
  "ok"
}

async fn render_metrics(State(state): State<AppState>) -> Response {
  match state.metrics {
    Some(handle) => handle.render().into_response(),
    None => StatusCode::NOT_FOUND.into_response(),
  }
}

async fn static_file(uri: Uri) -> Response {
  let asset = assets::resolve(uri.path());
  increment_counter!("static_requests", "outcome" => asset.outcome());
  match asset {
    Asset::File(file) => (
      TypedHeader(ContentType::from(assets::mime_for(file))),
      file.contents(),
    )
      .into_response(),
    Asset::Shell(status) => match assets::shell() {
      Some(shell) => (
        status,
        TypedHeader(ContentType::html()),
        TypedHeader(CacheControl::new().with_no_cache()),
        shell.contents(),
      )
        .into_response(),
      None => {
        tracing::error!("{} is not embedded", assets::SHELL);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
      }
    },
    Asset::Missing => (StatusCode::NOT_FOUND, "Not found").into_response(),
  }
}
