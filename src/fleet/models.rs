use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FleetBus {
    pub bus_id: u32,
    pub route: String,
    pub bus_type: String,
    pub departure: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FleetStop {
    pub bus_id: u32,
    pub stop_sequence: u16,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FleetServiceDate {
    pub bus_id: u32,
    pub date: String,
}

#[derive(Default, Debug, Clone)]
pub struct FleetData {
    pub buses: Vec<FleetBus>,
    pub stops: Vec<FleetStop>,
    pub service_dates: Vec<FleetServiceDate>,
}
