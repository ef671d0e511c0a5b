use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine;
use log::{error, info};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use lifegrid::LifeError;
use lifegrid::config::Params;
use lifegrid::render::PngFrames;

#[derive(Serialize)]
struct SimulateResponse {
    frames: Vec<String>,
    timings: Vec<TimingEntry>,
    grid_size: usize,
    interval_ms: u32,
    generations: u64,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Upper bound on frames per request.
const MAX_FRAMES: usize = 500;

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, msg: impl ToString) -> ApiError {
    (status, Json(ErrorBody { error: msg.to_string() }))
}

impl From<LifeError> for ErrorBody {
    fn from(e: LifeError) -> Self {
        ErrorBody { error: e.to_string() }
    }
}

fn data_url(png: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    format!("data:image/png;base64,{}", b64)
}

/// Missing request fields fall back to `Params::default()`; every field is
/// then held to the run limits.
fn limit_request(mut params: Params) -> Params {
    params.frames = params.frames.min(MAX_FRAMES);
    params.clamped()
}

async fn simulate_handler(
    Json(params): Json<Params>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let params = limit_request(params);

    let result = tokio::task::spawn_blocking(move || {
        let mut sink = PngFrames {
            cell_px: params.cell_px,
            frames: Vec::new(),
        };
        let (outcome, timings) = lifegrid::run(&params, &mut sink)?;

        Ok::<_, LifeError>(SimulateResponse {
            frames: sink.frames.iter().map(|png| data_url(png)).collect(),
            timings: timings
                .iter()
                .map(|t| TimingEntry {
                    name: t.name.to_string(),
                    ms: t.ms,
                })
                .collect(),
            grid_size: params.grid_size,
            interval_ms: params.interval_ms,
            generations: outcome.generations,
            seed: outcome.seed,
        })
    })
    .await
    .map_err(|e| {
        error!("simulation task failed: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) if e.is_invalid_argument() => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorBody::from(e))))
        }
        Err(e) => {
            error!("simulation failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::from(e))))
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/simulate", post(simulate_handler))
        .fallback_service(frontend)
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("lifegrid server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
