use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{ApiError, BUS_NOT_FOUND, parse_bus_id, required},
    dto::BusStopsDto,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use tracing::debug;

pub async fn bus_stops(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let bus_id = parse_bus_id(required(&params, "bus_id")?)?
        .ok_or_else(|| ApiError::not_found(BUS_NOT_FOUND))?;

    let stops = state.registry.stop_names(bus_id).map_err(|err| {
        debug!("Stop lookup failed: {err}");
        ApiError::not_found(BUS_NOT_FOUND)
    })?;
    Ok(Json(BusStopsDto {
        bus_id,
        stops: stops.iter().map(|name| name.to_string()).collect(),
    })
    .into_response())
}
