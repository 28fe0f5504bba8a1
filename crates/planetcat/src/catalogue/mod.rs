//! In-memory catalogue of planets and researchers.
//!
//! The catalogue owns two independent stores:
//! - [`PlanetStore`]: add, edit, remove and exact-name lookup of planets,
//!   plus discovered/observed statistics
//! - [`ResearcherStore`]: registration with sequential ids, edit and id
//!   lookup of researchers
//!
//! Both stores are bounded by configurable capacities and keep records in
//! insertion order. Nothing is persisted.

mod planet;
mod researcher;
mod text;

pub use planet::{Planet, PlanetHandle, PlanetStats, PlanetStore, PlanetUpdate};
pub use researcher::{Researcher, ResearcherHandle, ResearcherId, ResearcherStore};
pub use text::TextLimits;

use tracing::info;

use crate::config::CatalogueConfig;

/// The planet and researcher stores of one session.
#[derive(Debug, Clone)]
pub struct Catalogue {
    planets: PlanetStore,
    researchers: ResearcherStore,
}

impl Catalogue {
    /// Create an empty catalogue sized by the given configuration.
    #[must_use]
    pub fn new(config: &CatalogueConfig) -> Self {
        let limits = TextLimits::from(config);
        info!(
            max_planets = config.max_planets,
            max_researchers = config.max_researchers,
            "catalogue created"
        );
        Self {
            planets: PlanetStore::new(config.max_planets, limits),
            researchers: ResearcherStore::new(config.max_researchers, limits),
        }
    }

    /// The planet store.
    #[must_use]
    pub fn planets(&self) -> &PlanetStore {
        &self.planets
    }

    /// The planet store, mutably.
    pub fn planets_mut(&mut self) -> &mut PlanetStore {
        &mut self.planets
    }

    /// The researcher store.
    #[must_use]
    pub fn researchers(&self) -> &ResearcherStore {
        &self.researchers
    }

    /// The researcher store, mutably.
    pub fn researchers_mut(&mut self) -> &mut ResearcherStore {
        &mut self.researchers
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new(&CatalogueConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_configured_capacities() {
        let config = CatalogueConfig {
            max_planets: 3,
            max_researchers: 2,
            ..CatalogueConfig::default()
        };
        let catalogue = Catalogue::new(&config);

        assert_eq!(catalogue.planets().capacity(), 3);
        assert_eq!(catalogue.researchers().capacity(), 2);
        assert!(catalogue.planets().is_empty());
        assert!(catalogue.researchers().is_empty());
    }

    #[test]
    fn test_new_with_huge_capacity() {
        let config = CatalogueConfig {
            max_planets: usize::MAX,
            max_researchers: usize::MAX,
            ..CatalogueConfig::default()
        };
        let mut catalogue = Catalogue::new(&config);

        assert_eq!(catalogue.planets().capacity(), usize::MAX);
        assert!(!catalogue.researchers().is_full());
        catalogue.researchers_mut().add("Ada", "ada@lab").unwrap();
        assert_eq!(catalogue.researchers().len(), 1);
    }

    #[test]
    fn test_default_catalogue() {
        let catalogue = Catalogue::default();
        assert_eq!(catalogue.planets().capacity(), 100);
        assert_eq!(catalogue.researchers().capacity(), 50);
    }

    #[test]
    fn test_stores_are_independent() {
        let mut catalogue = Catalogue::default();
        catalogue
            .planets_mut()
            .add(Planet {
                name: "Earth".to_string(),
                kind: "Terrestrial".to_string(),
                size: 1.0,
                distance_from_star: 1.0,
                orbital_period: 1.0,
                description: "Home".to_string(),
                discovered: true,
                observed: true,
            })
            .unwrap();

        assert_eq!(catalogue.planets().len(), 1);
        assert!(catalogue.researchers().is_empty());

        catalogue.researchers_mut().add("Ada", "ada@lab").unwrap();
        assert_eq!(catalogue.planets().statistics().total, 1);
        assert_eq!(catalogue.researchers().len(), 1);
    }
}
