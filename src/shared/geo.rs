use std::{fmt::Display, ops::AddAssign};

use serde::{Deserialize, Serialize};

/// Number of decimal places reported for a live position.
pub const REPORTED_PRECISION: i32 = 6;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Self) {
        self.latitude += rhs.latitude;
        self.longitude += rhs.longitude;
    }
}

impl Coordinate {
    /// Rounds both components to the given number of decimal places.
    pub fn rounded(&self, places: i32) -> Self {
        Self {
            latitude: round_to(self.latitude, places),
            longitude: round_to(self.longitude, places),
        }
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[test]
fn round_to_six_places() {
    assert_eq!(round_to(21.145_123_456_7, 6), 21.145_123);
    assert_eq!(round_to(79.088_000_7, 6), 79.088_001);
}

#[test]
fn coordinate_add_test() {
    let mut coord = Coordinate::from((21.145, 79.088));
    coord += Coordinate::from((0.001, 0.0005));
    assert!((coord.latitude - 21.146).abs() < 1e-9);
    assert!((coord.longitude - 79.0885).abs() < 1e-9);
}

#[test]
fn coordinate_rounded_test() {
    let coord = Coordinate::from((21.145_678_91, 79.088_111_19)).rounded(REPORTED_PRECISION);
    assert_eq!(coord, Coordinate::from((21.145_679, 79.088_111)));
}
