use busline::repository::Stop;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl StopDto {
    pub fn from(stop: &Stop) -> Self {
        let name = stop.name.to_string();
        let lat = stop.coordinate.latitude;
        let lon = stop.coordinate.longitude;
        Self { name, lat, lon }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusStopsDto {
    pub bus_id: u32,
    pub stops: Vec<String>,
}
