use crate::fleet::{Config, Fleet, models::*};

const SERVICE_DATES: [&str; 2] = ["2025-10-15", "2025-10-16"];

/// The built-in Gondia to Nagpur fleet served when no archive is given.
pub fn demo() -> Fleet {
    let buses = vec![
        FleetBus {
            bus_id: 1,
            route: "Gondia-Nagpur".into(),
            bus_type: "AC".into(),
            departure: "08:00".into(),
        },
        FleetBus {
            bus_id: 2,
            route: "Gondia-Nagpur".into(),
            bus_type: "Non-AC".into(),
            departure: "10:00".into(),
        },
    ];

    let stops = [
        (1, "Gondia", 21.145, 79.088),
        (1, "Amgaon", 21.146, 79.089),
        (1, "Nagbhid", 21.147, 79.090),
        (1, "Nagpur", 21.148, 79.091),
        (2, "Gondia", 21.146, 79.089),
        (2, "Tumsar", 21.147, 79.090),
        (2, "Nagpur", 21.148, 79.091),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (bus_id, name, lat, lon))| FleetStop {
        bus_id,
        stop_sequence: i as u16 + 1,
        stop_name: name.into(),
        stop_lat: lat,
        stop_lon: lon,
    })
    .collect();

    let service_dates = buses
        .iter()
        .flat_map(|bus| {
            SERVICE_DATES.iter().map(move |date| FleetServiceDate {
                bus_id: bus.bus_id,
                date: date.to_string(),
            })
        })
        .collect();

    Fleet::new(Config::default()).from_data(FleetData {
        buses,
        stops,
        service_dates,
    })
}
