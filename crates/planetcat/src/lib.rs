//! `planetcat` - An in-memory catalogue of planets and researchers
//!
//! This library provides the planet and researcher stores, their
//! configuration, and the interactive menu session that drives them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use catalogue::{
    Catalogue, Planet, PlanetStats, PlanetStore, PlanetUpdate, Researcher, ResearcherId,
    ResearcherStore,
};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{Role, Session};
