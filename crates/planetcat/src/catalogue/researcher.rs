//! Researcher records and the researcher store.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::text::TextLimits;
use crate::error::{Error, Result};

const STORE: &str = "researcher";

/// Sequential researcher identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearcherId(pub u32);

impl fmt::Display for ResearcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Researcher {
    /// Identifier assigned when the researcher was added.
    pub id: ResearcherId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Number of planets the researcher has worked on.
    ///
    /// Starts at zero. Nothing increments it yet.
    pub contributions: u32,
}

/// Position of a researcher inside its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResearcherHandle(usize);

/// Capacity-bounded, insertion-ordered collection of researchers.
///
/// Researchers are never removed, so ids stay unique for the life of the
/// store.
#[derive(Debug, Clone)]
pub struct ResearcherStore {
    researchers: Vec<Researcher>,
    capacity: usize,
    limits: TextLimits,
}

impl ResearcherStore {
    /// Create an empty store holding at most `capacity` researchers.
    #[must_use]
    pub fn new(capacity: usize, limits: TextLimits) -> Self {
        Self {
            researchers: Vec::new(),
            capacity,
            limits,
        }
    }

    /// Register a researcher and return the id assigned to them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the store is full.
    pub fn add(&mut self, name: &str, email: &str) -> Result<ResearcherId> {
        if self.is_full() {
            warn!(capacity = self.capacity, "rejecting researcher: store is full");
            return Err(Error::capacity_exceeded(STORE, self.capacity));
        }

        let id = self.next_id()?;
        self.researchers.push(Researcher {
            id,
            name: self.limits.name(name),
            email: self.limits.name(email),
            contributions: 0,
        });
        debug!(%id, "added researcher");
        Ok(id)
    }

    /// Find the researcher with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: ResearcherId) -> Option<ResearcherHandle> {
        self.researchers
            .iter()
            .position(|researcher| researcher.id == id)
            .map(ResearcherHandle)
    }

    /// Get the researcher a handle points at.
    #[must_use]
    pub fn get(&self, handle: ResearcherHandle) -> Option<&Researcher> {
        self.researchers.get(handle.0)
    }

    /// Replace a researcher's name and email. Id and contributions are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no researcher has that id.
    pub fn edit(&mut self, id: ResearcherId, name: &str, email: &str) -> Result<&Researcher> {
        let handle = self.find_by_id(id).ok_or_else(|| {
            warn!(%id, "researcher not found");
            Error::not_found(STORE, id)
        })?;
        let name = self.limits.name(name);
        let email = self.limits.name(email);

        let researcher = &mut self.researchers[handle.0];
        researcher.name = name;
        researcher.email = email;
        debug!(%id, "edited researcher");
        Ok(&*researcher)
    }

    /// Current contribution count of the researcher behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the handle does not belong to this
    /// store.
    pub fn contributions_of(&self, handle: ResearcherHandle) -> Result<u32> {
        self.get(handle)
            .map(|researcher| researcher.contributions)
            .ok_or_else(|| Error::not_found(STORE, format!("handle {}", handle.0)))
    }

    /// Iterate over researchers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Researcher> {
        self.researchers.iter()
    }

    /// Number of researchers stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.researchers.len()
    }

    /// Whether the store holds no researchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.researchers.is_empty()
    }

    /// Maximum number of researchers the store accepts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another add would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.researchers.len() >= self.capacity
    }

    fn next_id(&self) -> Result<ResearcherId> {
        u32::try_from(self.researchers.len() + 1)
            .map(ResearcherId)
            .map_err(|_| Error::capacity_exceeded(STORE, self.capacity))
    }
}
