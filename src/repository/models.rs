use std::{collections::HashSet, fmt::Display, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::shared::{
    geo::{Coordinate, REPORTED_PRECISION},
    time::Time,
};

/// A named point along a bus route.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stop {
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

/// A bus with its static route metadata and its live position.
#[derive(Debug)]
pub struct Bus {
    pub id: u32,
    /// Display name of the route, never used for matching.
    pub route: Arc<str>,
    /// Amenity class such as "AC" or "Non-AC".
    pub bus_type: Arc<str>,
    /// Stops in travel order. Never empty.
    pub stops: Box<[Stop]>,
    /// Dates (`YYYY-MM-DD`) the bus runs on.
    pub schedule: HashSet<Arc<str>>,
    /// Daily departure time.
    pub departure: Time,
    /// Current location of the bus. Starts at the first stop and only moves
    /// forward through [`Bus::advance`].
    position: Mutex<Coordinate>,
}

impl Bus {
    pub(crate) fn new(
        id: u32,
        route: Arc<str>,
        bus_type: Arc<str>,
        stops: Box<[Stop]>,
        schedule: HashSet<Arc<str>>,
        departure: Time,
    ) -> Self {
        let origin = stops.first().map(|stop| stop.coordinate).unwrap_or_default();
        Self {
            id,
            route,
            bus_type,
            stops,
            schedule,
            departure,
            position: Mutex::new(origin),
        }
    }

    pub fn stop_names(&self) -> Vec<Arc<str>> {
        self.stops.iter().map(|stop| stop.name.clone()).collect()
    }

    /// Index of the first stop with the given name.
    pub fn stop_position(&self, name: &str) -> Option<usize> {
        self.stops.iter().position(|stop| &*stop.name == name)
    }

    /// True when the bus passes `origin` strictly before `destination`.
    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        match (self.stop_position(origin), self.stop_position(destination)) {
            (Some(from), Some(to)) => from < to,
            _ => false,
        }
    }

    pub fn runs_on(&self, date: &str) -> bool {
        self.schedule.contains(date)
    }

    /// The stop after the origin, or the origin itself on a single stop route.
    pub fn next_stop(&self) -> &Stop {
        self.stops.get(1).unwrap_or(&self.stops[0])
    }

    pub fn position(&self) -> Coordinate {
        *self.position.lock()
    }

    /// Moves the bus by `step` and returns the new position. The update and
    /// the returned value come from the same critical section.
    pub fn advance(&self, step: Coordinate) -> Coordinate {
        let mut position = self.position.lock();
        *position += step;
        debug!("Bus {} moved to {}", self.id, *position);
        *position
    }

    /// The stop list with the origin replaced by the given live position.
    pub(crate) fn stops_at(&self, position: Coordinate) -> Vec<Stop> {
        let mut stops = self.stops.to_vec();
        if let Some(origin) = stops.first_mut() {
            origin.coordinate = position;
        }
        stops
    }
}

/// A bus matching a route search.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub bus_id: u32,
    pub route: Arc<str>,
    pub bus_type: Arc<str>,
    pub departure: Time,
    pub stops: Vec<Arc<str>>,
}

impl From<&Bus> for RouteSummary {
    fn from(bus: &Bus) -> Self {
        Self {
            bus_id: bus.id,
            route: bus.route.clone(),
            bus_type: bus.bus_type.clone(),
            departure: bus.departure,
            stops: bus.stop_names(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Arriving { minutes: u32 },
    Delayed { minutes: u32 },
}

impl Status {
    pub fn from_eta(eta: i64) -> Self {
        let minutes = eta.unsigned_abs().min(u32::MAX as u64) as u32;
        if eta >= 0 {
            Status::Arriving { minutes }
        } else {
            Status::Delayed { minutes }
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Arriving { minutes } => write!(f, "🕒 Arriving in {minutes} min"),
            Status::Delayed { minutes } => write!(f, "🚨 Delayed by {minutes} min"),
        }
    }
}

/// The live state of one bus at the moment it was polled.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    pub bus_id: u32,
    pub route: Arc<str>,
    pub bus_type: Arc<str>,
    /// Live position rounded to six decimal places.
    pub coordinate: Coordinate,
    /// Minutes until the next departure.
    pub eta: i64,
    pub status: Status,
    pub next_stop: Arc<str>,
    /// Full stop list, the first entry carrying the unrounded live position.
    pub stops: Vec<Stop>,
}

impl LocationReport {
    pub(crate) fn new(bus: &Bus, position: Coordinate, eta: i64) -> Self {
        Self {
            bus_id: bus.id,
            route: bus.route.clone(),
            bus_type: bus.bus_type.clone(),
            coordinate: position.rounded(REPORTED_PRECISION),
            eta,
            status: Status::from_eta(eta),
            next_stop: bus.next_stop().name.clone(),
            stops: bus.stops_at(position),
        }
    }
}

#[test]
fn status_branches_on_sign() {
    assert_eq!(Status::from_eta(12).to_string(), "🕒 Arriving in 12 min");
    assert_eq!(Status::from_eta(0).to_string(), "🕒 Arriving in 0 min");
    assert_eq!(Status::from_eta(-5).to_string(), "🚨 Delayed by 5 min");
}
