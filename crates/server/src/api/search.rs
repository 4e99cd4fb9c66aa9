use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{ApiError, required},
    dto::{RouteSummaryDto, SearchDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;

pub async fn search_buses(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let origin = required(&params, "origin")?;
    let destination = required(&params, "destination")?;
    let date = required(&params, "date")?;
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ApiError::bad_request(format!("Invalid date: {date}")));
    }

    let buses: Vec<_> = state
        .registry
        .search_routes(origin, destination, date)
        .into_iter()
        .map(RouteSummaryDto::from)
        .collect();
    Ok(Json(SearchDto { buses }).into_response())
}
