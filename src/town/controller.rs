//! Validation and orchestration façade over the [`TownStore`].

use crate::town::models::Town;
use crate::town::store::TownStore;
use std::sync::Arc;
use thiserror::Error;

/// Rejected input on [`TownController::add_town`].
///
/// The message text is part of the observable contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid town name.")]
    InvalidName,
    #[error("Population must be a positive number.")]
    InvalidPopulation,
}

/// Town names must be longer than this after trimming.
const MIN_NAME_LEN: usize = 3;

/// Validated CRUD operations over a shared [`TownStore`].
///
/// The controller owns no state beyond its store handle and is cheap to
/// clone; clones operate on the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct TownController {
    store: Arc<TownStore>,
}

impl TownController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Arc<TownStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a new town.
    ///
    /// A duplicate name is not an error: the existing record is returned
    /// untouched and the new population is discarded (first write wins).
    /// Validation runs before any mutation, name first.
    pub fn add_town(&self, name: &str, population: i64) -> Result<Town, ValidationError> {
        let name = name.trim();
        if name.len() <= MIN_NAME_LEN {
            return Err(ValidationError::InvalidName);
        }
        if population <= 0 {
            return Err(ValidationError::InvalidPopulation);
        }

        if let Some(existing) = self.store.find_by_name(name) {
            log::debug!("Town '{}' already exists, keeping the original record", name);
            return Ok(existing);
        }

        let town = self.store.insert(name.to_string(), population);
        log::info!("Added town '{}' with id {}", town.name, town.id);
        Ok(town)
    }

    /// Point lookup by exact name. No validation is performed.
    pub fn get_town_by_name(&self, name: &str) -> Option<Town> {
        self.store.find_by_name(name)
    }

    /// Overwrites the population of the town with the given id.
    ///
    /// An unknown id is a silent no-op returning `None`; callers that need
    /// a not-found signal (the HTTP layer) map it themselves.
    pub fn update_town(&self, id: i32, population: i64) -> Option<Town> {
        self.store.update_population(id, population)
    }

    /// Removes the town with the given id. An absent id is a no-op.
    pub fn delete_town(&self, id: i32) -> bool {
        self.store.delete_by_id(id)
    }

    /// All towns in insertion order.
    pub fn list_towns(&self) -> Vec<Town> {
        self.store.list_all()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Clears every record and the id sequence.
    ///
    /// Intended for test isolation, not production use.
    pub fn reset_database(&self) {
        self.store.clear_all();
        log::info!("Town store reset");
    }
}
