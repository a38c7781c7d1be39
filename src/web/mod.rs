use std::collections::BTreeMap;
use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::aggregate::EquityResult;
use crate::calculator::{Calculator, CalculatorConfig, MAX_TRIALS};
use crate::cards::{Board, Card, Hand, parse_cards};
use crate::error::EquityError;

#[derive(Clone)]
struct AppState {
    config: CalculatorConfig,
}

/// Cards given either as one string of tokens or as a list of tokens.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardsInput {
    Text(String),
    Tokens(Vec<String>),
}

impl CardsInput {
    fn into_cards(self) -> Result<Vec<Card>, EquityError> {
        match self {
            CardsInput::Text(text) => parse_cards(&text),
            CardsInput::Tokens(tokens) => tokens.iter().map(|t| t.parse()).collect(),
        }
    }
}

/// Hands as `"Ah Kh, Qc Qd"` or as `[["Ah", "Kh"], ["Qc", "Qd"]]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HandsInput {
    Text(String),
    Lists(Vec<Vec<String>>),
}

impl Default for HandsInput {
    fn default() -> Self {
        HandsInput::Text(String::new())
    }
}

impl HandsInput {
    fn into_hands(self) -> Result<Vec<Hand>, EquityError> {
        match self {
            HandsInput::Text(text) => text
                .split(',')
                .filter(|segment| !segment.trim().is_empty())
                .map(str::parse)
                .collect(),
            HandsInput::Lists(lists) => lists
                .into_iter()
                .map(|tokens| Hand::new(&CardsInput::Tokens(tokens).into_cards()?))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EquityRequest {
    #[serde(default)]
    hands: HandsInput,
    board: Option<CardsInput>,
    bet_sizing: Option<String>,
    trials: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResponse {
    pub equity: BTreeMap<String, f64>,
    pub tie: BTreeMap<String, f64>,
    pub bet_sizing: String,
    pub trials: u64,
}

impl EquityResponse {
    fn new(result: &EquityResult, bet_sizing: String) -> Self {
        Self {
            equity: result.labelled_wins(),
            tie: BTreeMap::from([("Tie".to_string(), result.tie)]),
            bet_sizing,
            trials: result.trials,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Equity(#[from] EquityError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error("simulation task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Equity(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, error = %self, "equity request rejected");
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub async fn serve(addr: SocketAddr, config: CalculatorConfig) -> Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "equity service listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let api = Router::new().route("/calculate-equity", post(calculate_equity));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn router(config: CalculatorConfig) -> Router {
    build_router(AppState { config })
}

async fn health() -> &'static str {
    "ok"
}

fn resolve_trials(requested: Option<i64>, default: u32) -> Result<u32, EquityError> {
    match requested {
        None => Ok(default),
        Some(value) => u32::try_from(value)
            .ok()
            .filter(|trials| (1..=MAX_TRIALS).contains(trials))
            .ok_or(EquityError::InvalidTrialCount(value)),
    }
}

async fn calculate_equity(
    State(state): State<AppState>,
    payload: Result<Json<EquityRequest>, JsonRejection>,
) -> Result<Json<EquityResponse>, ApiError> {
    let Json(req) = payload?;
    let hands = req.hands.into_hands()?;
    let board = match req.board {
        Some(input) => Board::new(input.into_cards()?)?,
        None => Board::default(),
    };
    let config = CalculatorConfig {
        trials: resolve_trials(req.trials, state.config.trials)?,
        ..state.config
    };

    let result = tokio::task::spawn_blocking(move || {
        Calculator::new(config).calculate(&hands, &board)
    })
    .await??;

    Ok(Json(EquityResponse::new(
        &result,
        req.bet_sizing.unwrap_or_default(),
    )))
}
