//! Text presentation of the network: route listing, statistics report and
//! the interactive route finder.
//!
//! Everything writes to a caller-supplied writer so the binary can use
//! stdout and tests can capture the output.

use std::io::{self, BufRead, Write};

use crate::domain::Stop;
use crate::network::Network;

/// Width of the `=====` rule under each heading.
const DIVIDER_WIDTH: usize = 30;

/// Typing this at the origin prompt leaves the route finder.
const EXIT_COMMAND: &str = "exit";

fn divider() -> String {
    format!("\n{}", "=".repeat(DIVIDER_WIDTH))
}

/// List every route name, sorted.
pub fn write_routes<W: Write>(network: &Network, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAll Subway routes: {}", divider())?;

    let mut names: Vec<&str> = network.routes().keys().map(String::as_str).collect();
    names.sort_unstable();
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Report the largest and smallest routes and every connecting stop.
pub fn write_statistics<W: Write>(network: &Network, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThe subway route(s) with the most stops are: {}", divider())?;
    for stat in network.get_routes_with_most_stops() {
        writeln!(out, "{}: {}", stat.name, stat.stop_count)?;
    }

    writeln!(out, "\nThe subway route(s) with the fewest stops are: {}", divider())?;
    for stat in network.get_routes_with_least_stops() {
        writeln!(out, "{}: {}", stat.name, stat.stop_count)?;
    }

    writeln!(out, "\nSubway stops that connect two or more routes: {}", divider())?;
    let mut connecting: Vec<_> = network.get_connecting_stops().into_iter().collect();
    connecting.sort_unstable_by_key(|(name, _)| *name);
    for (name, routes) in connecting {
        let mut routes: Vec<&str> = routes.iter().map(String::as_str).collect();
        routes.sort_unstable();
        writeln!(out, "{name} ({})", routes.join(", "))?;
    }
    Ok(())
}

/// Print one route-finder answer.
pub fn write_itinerary<W: Write>(
    origin: &Stop,
    destination: &Stop,
    itinerary: &[String],
    out: &mut W,
) -> io::Result<()> {
    if itinerary.is_empty() {
        writeln!(out, "\n{} to {} -> no route found", origin.name(), destination.name())
    } else {
        writeln!(
            out,
            "\n{} to {} -> {}",
            origin.name(),
            destination.name(),
            itinerary.join(", ")
        )
    }
}

/// Print `prompt` and read one trimmed line. `None` at end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for an origin and destination and print a route between them,
/// until the user types `exit` or input ends.
///
/// Unknown stop names are reported and the user is asked again.
pub fn run_route_prompt<R: BufRead, W: Write>(
    network: &Network,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out, "\n\nRoute Finder {}", divider())?;

        let Some(origin) = read_answer(input, out, "Enter origin: ")? else {
            break;
        };
        if origin.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        let Some(destination) = read_answer(input, out, "Enter destination: ")? else {
            break;
        };

        match (
            network.get_stop_from_string(&origin),
            network.get_stop_from_string(&destination),
        ) {
            (Ok(from), Ok(to)) => {
                let itinerary = network.get_routes_for_stops(from, to);
                write_itinerary(from, to, &itinerary, out)?;
            }
            _ => writeln!(
                out,
                "Unknown origin -> destination: [{origin}] -> [{destination}]"
            )?,
        }
    }
    Ok(())
}
