//! Human-readable reports over catalogue records.

use std::fmt::Write as _;

use crate::catalogue::{Planet, PlanetStats, Researcher};

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// The "Planet Details" block shown after a search.
#[must_use]
pub fn planet_details(planet: &Planet, precision: usize) -> String {
    let mut out = String::from("\nPlanet Details:\n");
    let _ = writeln!(out, "Name: {}", planet.name);
    let _ = writeln!(out, "Type: {}", planet.kind);
    let _ = writeln!(out, "Size: {:.precision$}", planet.size);
    let _ = writeln!(
        out,
        "Distance from Star: {:.precision$} AU",
        planet.distance_from_star
    );
    let _ = writeln!(
        out,
        "Orbital Period: {:.precision$} years",
        planet.orbital_period
    );
    let _ = writeln!(out, "Description: {}", planet.description);
    let _ = writeln!(out, "Discovered: {}", yes_no(planet.discovered));
    let _ = write!(out, "Observed: {}", yes_no(planet.observed));
    out
}

/// The three statistics lines.
#[must_use]
pub fn statistics(stats: &PlanetStats) -> String {
    format!(
        "Number of planets catalogued: {}\n\
         Number of discovered planets: {}\n\
         Number of observed planets: {}",
        stats.total, stats.discovered, stats.observed
    )
}

/// A short researcher summary.
#[must_use]
pub fn researcher_details(researcher: &Researcher) -> String {
    format!(
        "\nResearcher Details:\n\
         ID: {}\n\
         Name: {}\n\
         Email: {}\n\
         Contributions: {}",
        researcher.id, researcher.name, researcher.email, researcher.contributions
    )
}
