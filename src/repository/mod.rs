use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

mod models;
pub use models::*;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    fleet::{self, models::FleetStop},
    shared::{Clock, Coordinate, Jitter, Time},
};

type IdToIndex = HashMap<u32, usize>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bus {0} not found")]
    NotFound(u32),
    #[error("Bus {0} is listed more than once")]
    DuplicateBus(u32),
    #[error("Bus {0} has no stops")]
    EmptyRoute(u32),
    #[error("Bus {bus_id} lists stop sequence {sequence} more than once")]
    DuplicateStop { bus_id: u32, sequence: u16 },
    #[error("Bus {bus_id} has an invalid departure time: {value}")]
    InvalidDeparture { bus_id: u32, value: String },
    #[error("Fleet error: {0}")]
    Fleet(#[from] fleet::Error),
}

/// Owns every bus and answers route, location and stop queries.
///
/// The set of buses and their stop lists are fixed once the registry is
/// built. The only state that changes afterwards is each bus's live
/// position, which is guarded per bus.
#[derive(Debug, Default)]
pub struct Registry {
    buses: Box<[Bus]>,
    bus_lookup: Arc<IdToIndex>,
}

impl Registry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the registry from a fleet source.
    /// Fails if a bus id repeats, a bus has no stops, a bus repeats a stop
    /// sequence number or a departure time does not parse.
    pub fn with_fleet(mut self, fleet: fleet::Fleet) -> Result<Self, Error> {
        let mut rows = Vec::new();
        fleet.stream_buses(|(_, bus)| rows.push(bus))?;

        let mut bus_lookup: IdToIndex = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if bus_lookup.insert(row.bus_id, i).is_some() {
                return Err(Error::DuplicateBus(row.bus_id));
            }
        }

        let mut stops_by_bus: HashMap<u32, Vec<FleetStop>> = HashMap::new();
        fleet.stream_stops(|(_, stop)| {
            if bus_lookup.contains_key(&stop.bus_id) {
                stops_by_bus.entry(stop.bus_id).or_default().push(stop);
            } else {
                warn!("Skipping stop {} for unknown bus {}", stop.stop_name, stop.bus_id);
            }
        })?;

        let mut dates_by_bus: HashMap<u32, HashSet<Arc<str>>> = HashMap::new();
        fleet.stream_service_dates(|(_, value)| {
            if bus_lookup.contains_key(&value.bus_id) {
                dates_by_bus
                    .entry(value.bus_id)
                    .or_default()
                    .insert(value.date.trim().into());
            } else {
                warn!("Skipping service date {} for unknown bus {}", value.date, value.bus_id);
            }
        })?;

        let mut buses: Vec<Bus> = Vec::with_capacity(rows.len());
        for row in rows {
            let departure =
                Time::from_hm(&row.departure).ok_or_else(|| Error::InvalidDeparture {
                    bus_id: row.bus_id,
                    value: row.departure.clone(),
                })?;

            let mut stops = stops_by_bus.remove(&row.bus_id).unwrap_or_default();
            if stops.is_empty() {
                return Err(Error::EmptyRoute(row.bus_id));
            }
            stops.sort_by_key(|stop| stop.stop_sequence);
            if let Some(pair) = stops
                .windows(2)
                .find(|pair| pair[0].stop_sequence == pair[1].stop_sequence)
            {
                return Err(Error::DuplicateStop {
                    bus_id: row.bus_id,
                    sequence: pair[0].stop_sequence,
                });
            }
            let stops: Box<[Stop]> = stops
                .into_iter()
                .map(|stop| Stop {
                    name: stop.stop_name.into(),
                    coordinate: Coordinate::from((stop.stop_lat, stop.stop_lon)),
                })
                .collect();

            buses.push(Bus::new(
                row.bus_id,
                row.route.into(),
                row.bus_type.into(),
                stops,
                dates_by_bus.remove(&row.bus_id).unwrap_or_default(),
                departure,
            ));
        }

        info!("Loaded {} buses", buses.len());
        self.buses = buses.into();
        self.bus_lookup = bus_lookup.into();
        Ok(self)
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Get a bus with the given id.
    /// If no bus is found with the given id None is returned.
    pub fn bus_by_id(&self, id: u32) -> Option<&Bus> {
        let index = self.bus_lookup.get(&id)?;
        Some(&self.buses[*index])
    }

    /// Returns every bus that runs on `date` and reaches `destination` after
    /// `origin`, in registry order. Names must match exactly.
    pub fn search_routes(&self, origin: &str, destination: &str, date: &str) -> Vec<RouteSummary> {
        self.buses
            .par_iter()
            .filter(|bus| bus.serves(origin, destination) && bus.runs_on(date))
            .map(RouteSummary::from)
            .collect()
    }

    /// Runs one simulation tick for a bus and returns its new position.
    /// Returns None if no bus has the given id.
    pub fn advance(&self, bus_id: u32, jitter: &dyn Jitter) -> Option<Coordinate> {
        let bus = self.bus_by_id(bus_id)?;
        Some(bus.advance(jitter.step()))
    }

    /// Moves and reports either one bus or, without an id, every bus.
    /// An unknown id yields an empty list.
    pub fn locations(
        &self,
        bus_id: Option<u32>,
        jitter: &dyn Jitter,
        clock: &dyn Clock,
    ) -> Vec<LocationReport> {
        let selected: Vec<&Bus> = match bus_id {
            Some(id) => self.bus_by_id(id).into_iter().collect(),
            None => self.buses.iter().collect(),
        };
        selected
            .into_iter()
            .map(|bus| {
                let position = bus.advance(jitter.step());
                let eta = bus.departure.minutes_until(clock.now());
                LocationReport::new(bus, position, eta)
            })
            .collect()
    }

    /// Ordered stop names for a bus.
    pub fn stop_names(&self, bus_id: u32) -> Result<Vec<Arc<str>>, Error> {
        let bus = self.bus_by_id(bus_id).ok_or(Error::NotFound(bus_id))?;
        Ok(bus.stop_names())
    }
}
