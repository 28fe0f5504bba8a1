//! Planet records and the planet store.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::text::TextLimits;
use crate::error::{Error, Result};

const STORE: &str = "planet";

/// A catalogued planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Name used to look the planet up. Matched exactly, case-sensitive.
    pub name: String,
    /// Free-form planet type, e.g. "Gas giant".
    #[serde(rename = "type")]
    pub kind: String,
    /// Size, in whatever unit the cataloguer uses.
    pub size: f64,
    /// Distance from the host star in AU.
    pub distance_from_star: f64,
    /// Orbital period in Earth years.
    pub orbital_period: f64,
    /// Free-form description.
    pub description: String,
    /// Whether the planet has been discovered.
    pub discovered: bool,
    /// Whether the planet has been observed.
    pub observed: bool,
}

/// The fields an edit is allowed to overwrite.
///
/// Name, type and the discovered/observed flags are fixed once a planet is
/// catalogued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetUpdate {
    /// New size.
    pub size: f64,
    /// New distance from the host star in AU.
    pub distance_from_star: f64,
    /// New orbital period in Earth years.
    pub orbital_period: f64,
    /// New description.
    pub description: String,
}

impl Planet {
    /// Apply the editable fields of an update.
    fn apply(&mut self, update: PlanetUpdate) {
        self.size = update.size;
        self.distance_from_star = update.distance_from_star;
        self.orbital_period = update.orbital_period;
        self.description = update.description;
    }

    fn bounded(mut self, limits: TextLimits) -> Self {
        self.name = limits.name(self.name);
        self.kind = limits.name(self.kind);
        self.description = limits.description(self.description);
        self
    }
}

/// Position of a planet inside its store.
///
/// Removing an earlier planet shifts later ones, so a handle should be used
/// straight after the lookup that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetHandle(usize);

impl PlanetHandle {
    /// Zero-based position in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Aggregate counts over the planets in a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetStats {
    /// Number of planets catalogued.
    pub total: usize,
    /// Number of planets marked discovered.
    pub discovered: usize,
    /// Number of planets marked observed.
    pub observed: usize,
}

/// Capacity-bounded, insertion-ordered collection of planets.
///
/// Duplicate names are accepted, but name-based operations only ever reach
/// the earliest one.
#[derive(Debug, Clone)]
pub struct PlanetStore {
    planets: Vec<Planet>,
    capacity: usize,
    limits: TextLimits,
}

impl PlanetStore {
    /// Create an empty store holding at most `capacity` planets.
    #[must_use]
    pub fn new(capacity: usize, limits: TextLimits) -> Self {
        Self {
            planets: Vec::new(),
            capacity,
            limits,
        }
    }

    /// Append a planet.
    ///
    /// Text fields are truncated to the store's limits. No uniqueness check
    /// is made on the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the store is full; the store is
    /// left unchanged.
    pub fn add(&mut self, planet: Planet) -> Result<PlanetHandle> {
        if self.is_full() {
            warn!(capacity = self.capacity, "rejecting planet: store is full");
            return Err(Error::capacity_exceeded(STORE, self.capacity));
        }

        let planet = planet.bounded(self.limits);
        debug!(name = %planet.name, "adding planet");
        self.planets.push(planet);
        Ok(PlanetHandle(self.planets.len() - 1))
    }

    /// Find the first planet whose name equals `name` exactly.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<PlanetHandle> {
        let key = self.limits.key(name);
        self.planets
            .iter()
            .position(|planet| planet.name == key)
            .map(PlanetHandle)
    }

    /// Get the planet a handle points at.
    #[must_use]
    pub fn get(&self, handle: PlanetHandle) -> Option<&Planet> {
        self.planets.get(handle.0)
    }

    /// Look up a planet by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Planet> {
        self.find_by_name(name).and_then(|handle| self.get(handle))
    }

    /// Overwrite the editable fields of the first planet named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no planet has that name; the store is
    /// left unchanged.
    pub fn edit(&mut self, name: &str, update: PlanetUpdate) -> Result<&Planet> {
        let handle = self.resolve(name)?;
        let description = self.limits.description(update.description);
        let planet = &mut self.planets[handle.0];
        planet.apply(PlanetUpdate {
            description,
            ..update
        });
        debug!(name = %planet.name, "edited planet");
        Ok(&*planet)
    }

    /// Remove the first planet named `name`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no planet has that name; the store is
    /// left unchanged.
    pub fn remove(&mut self, name: &str) -> Result<Planet> {
        let handle = self.resolve(name)?;
        let planet = self.planets.remove(handle.0);
        debug!(name = %planet.name, remaining = self.planets.len(), "removed planet");
        Ok(planet)
    }

    /// Count all, discovered and observed planets.
    #[must_use]
    pub fn statistics(&self) -> PlanetStats {
        self.planets
            .iter()
            .fold(PlanetStats::default(), |mut stats, planet| {
                stats.total += 1;
                stats.discovered += usize::from(planet.discovered);
                stats.observed += usize::from(planet.observed);
                stats
            })
    }

    /// Iterate over planets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    /// Number of planets stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether the store holds no planets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Maximum number of planets the store accepts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another add would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.planets.len() >= self.capacity
    }

    fn resolve(&self, name: &str) -> Result<PlanetHandle> {
        self.find_by_name(name).ok_or_else(|| {
            warn!(name, "planet not found");
            Error::not_found(STORE, name)
        })
    }
}
