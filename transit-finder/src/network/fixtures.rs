//! Shared test networks.

use crate::provider::{FixtureProvider, RouteRecord, StopRecord};

use super::{Network, TransitMap};

/// Route layout: (name, line name, stop names). The route id is the name.
pub type Layout<'a> = (&'a str, Option<&'a str>, &'a [&'a str]);

/// Five routes over eleven stops:
///
/// ```text
/// Green   (line Green)   A B C D E
/// Green B (line Green)   K B C D
/// Red     (line Red)     F C G
/// Orange  (line Orange)  H D I
/// Blue    (line Blue)    I J
/// ```
pub fn sample_provider() -> FixtureProvider {
    let stop = |id: &str, name: &str| StopRecord::new(id, name);

    FixtureProvider::new()
        .with_route(RouteRecord::new("100", "Green").with_line_name("Green"))
        .with_route(RouteRecord::new("150", "Green B").with_line_name("Green"))
        .with_route(RouteRecord::new("200", "Red").with_line_name("Red"))
        .with_route(RouteRecord::new("300", "Orange").with_line_name("Orange"))
        .with_route(RouteRecord::new("400", "Blue").with_line_name("Blue"))
        .with_stops(
            "100",
            [
                stop("1", "A"),
                stop("2", "B"),
                stop("3", "C"),
                stop("4", "D"),
                stop("5", "E"),
            ],
        )
        .with_stops(
            "150",
            [stop("11", "K"), stop("2", "B"), stop("3", "C"), stop("4", "D")],
        )
        .with_stops("200", [stop("6", "F"), stop("3", "C"), stop("7", "G")])
        .with_stops("300", [stop("8", "H"), stop("4", "D"), stop("9", "I")])
        .with_stops("400", [stop("9", "I"), stop("10", "J")])
}

/// Build a provider from route layouts, in order.
pub fn provider_from(layouts: &[Layout<'_>]) -> FixtureProvider {
    layouts
        .iter()
        .fold(FixtureProvider::new(), |provider, (name, line, stops)| {
            let route = match line {
                Some(line) => RouteRecord::new(*name, *name).with_line_name(*line),
                None => RouteRecord::new(*name, *name),
            };
            provider
                .with_route(route)
                .with_stops(*name, stops.iter().map(|s| StopRecord::new("", *s)))
        })
}

/// Load a provider into a finished network.
pub async fn load(provider: FixtureProvider) -> Network {
    let mut map = TransitMap::new(provider);
    map.load_stops().await.unwrap();
    map.into_network()
}

pub async fn sample_network() -> Network {
    load(sample_provider()).await
}

pub async fn network_from(layouts: &[Layout<'_>]) -> Network {
    load(provider_from(layouts)).await
}
