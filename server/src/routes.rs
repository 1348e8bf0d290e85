use std::sync::Arc;

use armstrong::{Evaluation, evaluate_with_detail, find_in_range};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    database::{Attempt, InputType, fetch_attempts, push_attempt},
    error::AppError,
    state::State as AppState,
    utils::{page_bounds, page_count, validate_number, validate_range},
};

#[derive(Deserialize)]
pub struct CheckPayload {
    pub user: String,
    pub number: i64,
}

#[derive(Deserialize)]
pub struct RangePayload {
    pub user: String,
    pub min: i64,
    pub max: i64,
}

#[derive(Deserialize)]
pub struct AttemptsQuery {
    pub user: String,
    pub page: Option<u64>,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub is_armstrong: bool,
    pub detail: Evaluation,
}

#[derive(Serialize)]
pub struct RangeResponse {
    pub min: i64,
    pub max: i64,
    pub count: usize,
    pub numbers: Vec<i64>,
}

#[derive(Serialize)]
pub struct AttemptsResponse {
    pub attempts: Vec<Attempt>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub pages: u64,
}

pub async fn check_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_number(payload.number)?;

    let (is_armstrong, detail) = evaluate_with_detail(payload.number);

    let attempt = Attempt {
        user: payload.user,
        input_value: payload.number.to_string(),
        input_type: InputType::Single,
        result: serde_json::to_value(&detail)?,
        is_armstrong: Some(is_armstrong),
        count: None,
        created_at: Utc::now(),
    };

    let mut connection = state.redis_connection.clone();
    push_attempt(&mut connection, &attempt).await?;

    Ok((
        StatusCode::OK,
        Json(CheckResponse {
            is_armstrong,
            detail,
        }),
    ))
}

pub async fn range_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RangePayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_range(payload.min, payload.max, state.config.range_limit)?;

    let numbers = find_in_range(payload.min, payload.max);

    let attempt = Attempt {
        user: payload.user,
        input_value: format!("{}-{}", payload.min, payload.max),
        input_type: InputType::Range,
        result: json!({ "numbers": &numbers }),
        is_armstrong: None,
        count: Some(numbers.len()),
        created_at: Utc::now(),
    };

    let mut connection = state.redis_connection.clone();
    push_attempt(&mut connection, &attempt).await?;

    Ok((
        StatusCode::OK,
        Json(RangeResponse {
            min: payload.min,
            max: payload.max,
            count: numbers.len(),
            numbers,
        }),
    ))
}

pub async fn attempts_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AttemptsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = state.config.per_page;
    let (start, stop) = page_bounds(page, per_page);

    let mut connection = state.redis_connection.clone();
    let (total, attempts) = fetch_attempts(&mut connection, &query.user, start, stop).await?;

    Ok((
        StatusCode::OK,
        Json(AttemptsResponse {
            attempts,
            page,
            per_page,
            total,
            pages: page_count(total, per_page),
        }),
    ))
}
