pub struct Config {
    pub buses_file_name: String,
    pub stops_file_name: String,
    pub service_dates_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buses_file_name: "buses.txt".into(),
            stops_file_name: "stops.txt".into(),
            service_dates_file_name: "service_dates.txt".into(),
        }
    }
}
