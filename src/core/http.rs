//! Read-only HTTP query layer over processed tables, using Axum.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::io;
use crate::metrics::Metrics;
use crate::pipeline::{processed_path, processed_tickers};
use crate::signals::MarketSummary;

pub const SERVICE_NAME: &str = "market-intel";
pub const HEALTHY: &str = "healthy";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, metrics: Arc<Metrics>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            data_dir: Arc::new(data_dir),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    error!(error = %e, "Request failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

/// Ticker names become file names; keep them to a safe alphabet.
fn is_valid_ticker(ticker: &str) -> bool {
    !ticker.is_empty()
        && ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '^' | '='))
        && !ticker.contains("..")
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": HEALTHY,
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "service": SERVICE_NAME
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    let status = response.status();
    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List tickers that have processed data.
async fn list_tickers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let data_dir = state.data_dir.clone();
    let tickers = tokio::task::spawn_blocking(move || processed_tickers(&data_dir))
        .await
        .map_err(internal_error)?
        .map_err(internal_error)?;

    Ok(Json(json!({ "tickers": tickers })))
}

/// Processed rows for one ticker as JSON records.
async fn get_ticker_data(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let not_found = || api_error(StatusCode::NOT_FOUND, format!("Data for {} not found.", ticker));

    if !is_valid_ticker(&ticker) {
        return Err(not_found());
    }
    let path = processed_path(&state.data_dir, &ticker);
    if !path.exists() {
        return Err(not_found());
    }

    let records = tokio::task::spawn_blocking(move || io::read_records(&path))
        .await
        .map_err(internal_error)?
        .map_err(internal_error)?;

    Ok(Json(json!({
        "ticker": ticker,
        "count": records.len(),
        "data": records,
    })))
}

/// Last close, RSI and signal for every processed ticker.
async fn market_summary(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let data_dir = state.data_dir.clone();
    let summary = tokio::task::spawn_blocking(move || -> std::io::Result<Vec<MarketSummary>> {
        let mut summary = Vec::new();
        for ticker in processed_tickers(&data_dir)? {
            match io::read_records(&processed_path(&data_dir, &ticker)) {
                Ok(records) => summary.extend(MarketSummary::from_records(&ticker, &records)),
                Err(e) => warn!(ticker = %ticker, error = %e, "Skipping unreadable processed file"),
            }
        }
        Ok(summary)
    })
    .await
    .map_err(internal_error)?
    .map_err(internal_error)?;

    Ok(Json(json!({ "summary": summary })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/tickers", get(list_tickers))
        .route("/api/data/{ticker}", get(get_ticker_data))
        .route("/api/summary", get(market_summary))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, data_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    info!(data_dir = %data_dir.display(), "Serving processed data");

    let app = create_router(AppState::new(data_dir, metrics));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
