use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{ApiError, parse_bus_id},
    dto::{LocationDto, LocationsDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

pub async fn bus_location(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let reports = match params.get("bus_id") {
        Some(value) => match parse_bus_id(value)? {
            Some(id) => state
                .registry
                .locations(Some(id), &*state.jitter, &*state.clock),
            None => Vec::new(),
        },
        None => state
            .registry
            .locations(None, &*state.jitter, &*state.clock),
    };

    let bus_locations = reports.into_iter().map(LocationDto::from).collect();
    Ok(Json(LocationsDto { bus_locations }).into_response())
}
