use busline::prelude::*;

fn registry() -> Registry {
    Registry::new().with_fleet(fleet::demo()).unwrap()
}

fn ids(summaries: &[RouteSummary]) -> Vec<u32> {
    summaries.iter().map(|summary| summary.bus_id).collect()
}

#[test]
fn forward_search_finds_both_buses() {
    let registry = registry();
    let result = registry.search_routes("Gondia", "Nagpur", "2025-10-15");
    assert_eq!(ids(&result), vec![1, 2]);

    let first = &result[0];
    assert_eq!(&*first.route, "Gondia-Nagpur");
    assert_eq!(&*first.bus_type, "AC");
    assert_eq!(first.departure.to_hm_string(), "08:00");
    let stops: Vec<&str> = first.stops.iter().map(|name| &**name).collect();
    assert_eq!(stops, vec!["Gondia", "Amgaon", "Nagbhid", "Nagpur"]);
}

#[test]
fn backward_search_is_empty() {
    let registry = registry();
    assert!(registry.search_routes("Nagpur", "Gondia", "2025-10-15").is_empty());
}

#[test]
fn unscheduled_date_is_empty() {
    let registry = registry();
    assert!(registry.search_routes("Gondia", "Nagpur", "2025-10-20").is_empty());
}

#[test]
fn intermediate_stop_selects_one_bus() {
    let registry = registry();
    let result = registry.search_routes("Amgaon", "Nagpur", "2025-10-16");
    assert_eq!(ids(&result), vec![1]);
    // The summary still carries the whole route.
    assert_eq!(result[0].stops.len(), 4);
}

#[test]
fn same_origin_and_destination_never_match() {
    let registry = registry();
    assert!(registry.search_routes("Gondia", "Gondia", "2025-10-15").is_empty());
}

#[test]
fn unknown_stop_never_matches() {
    let registry = registry();
    assert!(registry.search_routes("gondia", "Nagpur", "2025-10-15").is_empty());
    assert!(registry.search_routes("Gondia", "Mumbai", "2025-10-15").is_empty());
}

#[test]
fn direction_is_exclusive_for_every_stop_pair() {
    let registry = registry();
    for bus in registry.buses() {
        for a in bus.stops.iter() {
            for b in bus.stops.iter() {
                let forward = ids(&registry.search_routes(&a.name, &b.name, "2025-10-15"));
                let backward = ids(&registry.search_routes(&b.name, &a.name, "2025-10-15"));
                assert!(
                    !forward.iter().any(|id| backward.contains(id)),
                    "{} and {} matched both ways",
                    a.name,
                    b.name
                );
            }
        }
    }
}

#[test]
fn search_does_not_move_buses() {
    let registry = registry();
    registry.search_routes("Gondia", "Nagpur", "2025-10-15");
    for bus in registry.buses() {
        assert_eq!(bus.position(), bus.stops[0].coordinate);
    }
}

#[test]
fn stop_names_for_known_bus() {
    let registry = registry();
    let names = registry.stop_names(2).unwrap();
    let names: Vec<&str> = names.iter().map(|name| &**name).collect();
    assert_eq!(names, vec!["Gondia", "Tumsar", "Nagpur"]);
}

#[test]
fn stop_names_for_unknown_bus_is_not_found() {
    let registry = registry();
    assert!(matches!(
        registry.stop_names(99),
        Err(busline::repository::Error::NotFound(99))
    ));
}
