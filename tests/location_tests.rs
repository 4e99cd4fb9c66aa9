use busline::{
    prelude::*,
    shared::{MAX_STEP, MIN_STEP},
};
use chrono::NaiveDate;
use std::{sync::Arc, thread};

fn registry() -> Registry {
    Registry::new().with_fleet(fleet::demo()).unwrap()
}

fn at(h: u32, m: u32) -> FixedClock {
    let now = NaiveDate::from_ymd_opt(2025, 10, 15)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    FixedClock(now)
}

#[test]
fn repeated_polls_drift_north_east() {
    let registry = registry();
    let first = registry.locations(Some(1), &RandomJitter, &SystemClock);
    let second = registry.locations(Some(1), &RandomJitter, &SystemClock);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(second[0].coordinate.latitude > first[0].coordinate.latitude);
    assert!(second[0].coordinate.longitude > first[0].coordinate.longitude);
}

#[test]
fn tick_moves_only_the_origin() {
    let registry = registry();
    let jitter = FixedJitter(Coordinate::from((0.001, 0.0001)));
    let report = registry.locations(Some(2), &jitter, &at(9, 0)).remove(0);

    assert!((report.stops[0].coordinate.latitude - 21.147).abs() < 1e-9);
    assert!((report.stops[0].coordinate.longitude - 79.0891).abs() < 1e-9);
    assert_eq!(report.stops[1].coordinate, Coordinate::from((21.147, 79.090)));
    assert_eq!(report.stops[2].coordinate, Coordinate::from((21.148, 79.091)));

    let bus = registry.bus_by_id(2).unwrap();
    assert_eq!(bus.stops[0].coordinate, Coordinate::from((21.146, 79.089)));
    assert_eq!(bus.position(), report.stops[0].coordinate);
}

#[test]
fn random_ticks_stay_within_step_bounds() {
    let registry = registry();
    let mut last = registry.bus_by_id(1).unwrap().position();
    for _ in 0..200 {
        let next = registry.advance(1, &RandomJitter).unwrap();
        let (dlat, dlon) = (next.latitude - last.latitude, next.longitude - last.longitude);
        assert!(dlat >= MIN_STEP - 1e-9 && dlat <= MAX_STEP + 1e-9);
        assert!(dlon >= MIN_STEP - 1e-9 && dlon <= MAX_STEP + 1e-9);
        last = next;
    }
}

#[test]
fn advance_unknown_bus_is_none() {
    assert!(registry().advance(42, &RandomJitter).is_none());
}

#[test]
fn reported_coordinates_have_six_decimals() {
    let registry = registry();
    let jitter = FixedJitter(Coordinate::from((0.000_123_456_7, 0.000_987_654_3)));
    let report = registry.locations(Some(1), &jitter, &at(7, 0)).remove(0);
    assert_eq!(report.coordinate, Coordinate::from((21.145_123, 79.088_988)));
    // The stop list keeps the unrounded position.
    assert!(report.stops[0].coordinate.latitude > 21.145_123);
}

#[test]
fn eta_and_status_before_departure() {
    let registry = registry();
    let jitter = FixedJitter(Coordinate::from((MIN_STEP, MIN_STEP)));
    let reports = registry.locations(None, &jitter, &at(7, 30));
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].eta, 30);
    assert_eq!(reports[0].status, Status::Arriving { minutes: 30 });
    assert_eq!(reports[0].status.to_string(), "🕒 Arriving in 30 min");
    assert_eq!(reports[1].eta, 150);
}

#[test]
fn eta_after_departure_rolls_to_tomorrow() {
    let registry = registry();
    let jitter = FixedJitter(Coordinate::from((MIN_STEP, MIN_STEP)));
    let report = registry.locations(Some(1), &jitter, &at(9, 15)).remove(0);
    assert_eq!(report.eta, 22 * 60 + 45);
    assert!((0..1440).contains(&report.eta));
}

#[test]
fn next_stop_is_second_stop() {
    let registry = registry();
    let reports = registry.locations(None, &RandomJitter, &at(6, 0));
    assert_eq!(&*reports[0].next_stop, "Amgaon");
    assert_eq!(&*reports[1].next_stop, "Tumsar");
}

#[test]
fn next_stop_falls_back_to_origin_on_single_stop_route() {
    let data = fleet::models::FleetData {
        buses: vec![fleet::models::FleetBus {
            bus_id: 5,
            route: "Depot".into(),
            bus_type: "AC".into(),
            departure: "12:00".into(),
        }],
        stops: vec![fleet::models::FleetStop {
            bus_id: 5,
            stop_sequence: 1,
            stop_name: "Depot".into(),
            stop_lat: 21.0,
            stop_lon: 79.0,
        }],
        service_dates: vec![],
    };
    let fleet = Fleet::new(fleet::Config::default()).from_data(data);
    let registry = Registry::new().with_fleet(fleet).unwrap();
    let report = registry.locations(Some(5), &RandomJitter, &at(6, 0)).remove(0);
    assert_eq!(&*report.next_stop, "Depot");
}

#[test]
fn unknown_bus_yields_no_reports() {
    let registry = registry();
    assert!(registry.locations(Some(99), &RandomJitter, &SystemClock).is_empty());
    for bus in registry.buses() {
        assert_eq!(bus.position(), bus.stops[0].coordinate);
    }
}

#[test]
fn concurrent_polls_apply_every_tick() {
    let registry = Arc::new(registry());
    let step = Coordinate::from((0.0005, 0.0002));
    let start = registry.bus_by_id(1).unwrap().position();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    registry.locations(Some(1), &FixedJitter(step), &SystemClock);
                }
            })
        })
        .collect();
    handles
        .into_iter()
        .for_each(|handle| handle.join().unwrap());

    let end = registry.bus_by_id(1).unwrap().position();
    assert!((end.latitude - start.latitude - 400.0 * 0.0005).abs() < 1e-6);
    assert!((end.longitude - start.longitude - 400.0 * 0.0002).abs() < 1e-6);
}
