use busline::repository::RouteSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummaryDto {
    pub bus_id: u32,
    pub route: String,
    #[serde(rename = "type")]
    pub bus_type: String,
    pub departure: String,
    pub stops: Vec<String>,
}

impl RouteSummaryDto {
    pub fn from(summary: RouteSummary) -> Self {
        Self {
            bus_id: summary.bus_id,
            route: summary.route.to_string(),
            bus_type: summary.bus_type.to_string(),
            departure: summary.departure.to_hm_string(),
            stops: summary.stops.iter().map(|name| name.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDto {
    pub buses: Vec<RouteSummaryDto>,
}
