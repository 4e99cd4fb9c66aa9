use busline::repository::LocationReport;
use serde::{Deserialize, Serialize};

use crate::dto::StopDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub bus_id: u32,
    pub route: String,
    #[serde(rename = "type")]
    pub bus_type: String,
    pub lat: f64,
    pub lon: f64,
    pub eta: i64,
    pub status: String,
    pub next_stop: String,
    pub stops: Vec<StopDto>,
}

impl LocationDto {
    pub fn from(report: LocationReport) -> Self {
        Self {
            bus_id: report.bus_id,
            route: report.route.to_string(),
            bus_type: report.bus_type.to_string(),
            lat: report.coordinate.latitude,
            lon: report.coordinate.longitude,
            eta: report.eta,
            status: report.status.to_string(),
            next_stop: report.next_stop.to_string(),
            stops: report.stops.iter().map(StopDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsDto {
    pub bus_locations: Vec<LocationDto>,
}
