//! End-to-end tests for route finding.

use super::Network;
use super::fixtures::{load, network_from, sample_network};
use crate::provider::FixtureProvider;

fn find(network: &Network, from: &str, to: &str) -> Vec<String> {
    let origin = network.get_stop_from_string(from).unwrap();
    let destination = network.get_stop_from_string(to).unwrap();
    network.get_routes_for_stops(origin, destination)
}

fn check_cases(network: &Network, cases: &[(&str, &str, &[&str])]) {
    for (from, to, expected) in cases {
        assert_eq!(
            find(network, from, to),
            *expected,
            "unexpected itinerary from {from} to {to}"
        );
    }
}

#[tokio::test]
async fn direct_routes() {
    let network = sample_network().await;

    check_cases(
        &network,
        &[
            ("A", "B", &["Green"]),
            ("A", "C", &["Green"]),
            ("A", "D", &["Green"]),
            ("A", "E", &["Green"]),
            ("C", "D", &["Green"]),
            ("D", "E", &["Green"]),
            ("F", "G", &["Red"]),
            ("H", "D", &["Orange"]),
            ("H", "I", &["Orange"]),
            ("J", "I", &["Blue"]),
            ("I", "J", &["Blue"]),
            ("C", "G", &["Red"]),
        ],
    );
}

#[tokio::test]
async fn single_route_end_to_end() {
    let network = network_from(&[("Only", None, &["A", "B", "C", "D", "E"])]).await;
    check_cases(&network, &[("A", "E", &["Only"]), ("E", "A", &["Only"])]);
}

#[tokio::test]
async fn same_stop_is_a_direct_route() {
    let network = sample_network().await;
    check_cases(&network, &[("A", "A", &["Green"]), ("C", "C", &["Green"])]);
}

#[tokio::test]
async fn changeover_routes() {
    let network = sample_network().await;

    check_cases(
        &network,
        &[
            ("A", "G", &["Green", "Red"]),
            ("A", "I", &["Green", "Orange"]),
            ("A", "J", &["Green", "Orange", "Blue"]),
            ("F", "J", &["Red", "Green", "Orange", "Blue"]),
        ],
    );
}

#[tokio::test]
async fn changeover_from_a_branch() {
    let network = sample_network().await;

    check_cases(
        &network,
        &[
            ("K", "G", &["Green B", "Red"]),
            ("K", "J", &["Green B", "Orange", "Blue"]),
            ("J", "F", &["Blue", "Orange", "Green", "Red"]),
        ],
    );
}

#[tokio::test]
async fn multi_hop_without_branches() {
    let network = network_from(&[
        ("Green", Some("G"), &["A", "B", "C", "D", "E"]),
        ("Red", Some("R"), &["F", "C", "G"]),
        ("Orange", Some("O"), &["H", "D", "I"]),
        ("Blue", Some("B"), &["I", "J"]),
    ])
    .await;

    check_cases(
        &network,
        &[
            ("A", "J", &["Green", "Orange", "Blue"]),
            ("F", "J", &["Red", "Green", "Orange", "Blue"]),
        ],
    );
}

#[tokio::test]
async fn multi_hop_with_unnamed_lines() {
    let network = network_from(&[
        ("Green", None, &["A", "B", "C", "D", "E"]),
        ("Red", None, &["F", "C", "G"]),
        ("Orange", None, &["H", "D", "I"]),
        ("Blue", None, &["I", "J"]),
    ])
    .await;

    check_cases(
        &network,
        &[
            ("A", "J", &["Green", "Orange", "Blue"]),
            ("F", "J", &["Red", "Green", "Orange", "Blue"]),
        ],
    );
}

#[tokio::test]
async fn transfer_between_branches_of_one_line() {
    let network = network_from(&[
        ("Green", Some("G"), &["A", "B", "C"]),
        ("Green A", Some("G"), &["B", "X", "Y"]),
    ])
    .await;

    check_cases(
        &network,
        &[
            ("A", "Y", &["Green", "Green A"]),
            ("Y", "A", &["Green A", "Green"]),
            ("C", "X", &["Green", "Green A"]),
        ],
    );
}

#[tokio::test]
async fn same_line_branch_is_not_followed() {
    let network = network_from(&[
        ("Green", Some("G"), &["A", "B", "C"]),
        ("Green A", Some("G"), &["B", "X"]),
        ("Red", Some("R"), &["C", "R1"]),
        ("Blue", Some("L"), &["R1", "Z"]),
    ])
    .await;

    check_cases(&network, &[("A", "Z", &["Green", "Red", "Blue"])]);
}

#[tokio::test]
async fn loops_terminate() {
    // Every route meets every other, in a cycle.
    let network = network_from(&[
        ("North", None, &["N", "NE", "NW"]),
        ("East", None, &["E", "NE", "SE"]),
        ("South", None, &["S", "SE", "SW"]),
        ("West", None, &["W", "SW", "NW"]),
        ("Island", None, &["Lonely"]),
    ])
    .await;

    check_cases(
        &network,
        &[
            ("N", "E", &["North", "East"]),
            ("N", "S", &["North", "East", "South"]),
        ],
    );
    assert!(find(&network, "N", "Lonely").is_empty());
}

#[tokio::test]
async fn disconnected_islands_find_nothing() {
    let network = network_from(&[
        ("Silver", None, &["S1", "S2", "S3"]),
        ("Trolley", None, &["T1", "T2"]),
        ("Ferry", None, &["T2", "F1"]),
    ])
    .await;

    assert!(find(&network, "S1", "F1").is_empty());
    assert!(find(&network, "F1", "S3").is_empty());
    check_cases(&network, &[("T1", "F1", &["Trolley", "Ferry"])]);
}

#[tokio::test]
async fn each_query_starts_fresh() {
    let network = sample_network().await;

    // A query exploring Green must not hide Green from the next one.
    check_cases(
        &network,
        &[
            ("A", "J", &["Green", "Orange", "Blue"]),
            ("A", "J", &["Green", "Orange", "Blue"]),
            ("A", "G", &["Green", "Red"]),
        ],
    );
}

#[tokio::test]
async fn bundled_sample_network() {
    let provider = FixtureProvider::from_path("data/sample_network.json").unwrap();
    let network = load(provider).await;

    check_cases(
        &network,
        &[
            ("Alewife", "South Station", &["Red Line"]),
            ("Oak Grove", "Bowdoin", &["Orange Line", "Blue Line"]),
            ("Mattapan", "Cleveland Circle", &["Mattapan Trolley", "Red Line", "Green Line C"]),
            ("Alewife", "Wonderland", &["Red Line", "Green Line B", "Blue Line"]),
        ],
    );

    let most: Vec<_> = network
        .get_routes_with_most_stops()
        .iter()
        .map(|s| (s.name, s.stop_count))
        .collect();
    assert_eq!(most, [("Red Line", 6)]);
}
