//! In-memory backing store for town records.
//!
//! The store keeps insertion order and owns the id sequence. It performs no
//! validation of its own; all input rules live in the controller.

use crate::town::models::Town;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct StoreInner {
    towns: Vec<Town>,
    next_id: i32,
}

/// Ordered collection of towns, addressable by id and by name.
///
/// All operations take the single lock for their full duration, so each call
/// is atomic with respect to every other call on the same store.
#[derive(Debug, Default)]
pub struct TownStore {
    inner: RwLock<StoreInner>,
}

impl TownStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a town under a freshly assigned id and returns the record.
    ///
    /// Ids increase monotonically and are never reused within the lifetime
    /// of this store instance, even across deletes.
    pub fn insert(&self, name: String, population: i64) -> Town {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let town = Town {
            id: inner.next_id,
            name,
            population,
        };
        inner.towns.push(town.clone());
        town
    }

    pub fn find_by_name(&self, name: &str) -> Option<Town> {
        let inner = self.inner.read();
        inner.towns.iter().find(|t| t.name == name).cloned()
    }

    /// Overwrites the population of the town with the given id, returning
    /// the updated record, or `None` when no such town exists.
    pub fn update_population(&self, id: i32, population: i64) -> Option<Town> {
        let mut inner = self.inner.write();
        let town = inner.towns.iter_mut().find(|t| t.id == id)?;
        town.population = population;
        Some(town.clone())
    }

    /// Removes the town with the given id. Returns `false` when absent.
    pub fn delete_by_id(&self, id: i32) -> bool {
        let mut inner = self.inner.write();
        let before = inner.towns.len();
        inner.towns.retain(|t| t.id != id);
        inner.towns.len() != before
    }

    /// All towns in insertion order.
    pub fn list_all(&self) -> Vec<Town> {
        self.inner.read().towns.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().towns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().towns.is_empty()
    }

    /// Drops every record and rewinds the id sequence.
    pub fn clear_all(&self) {
        let mut inner = self.inner.write();
        inner.towns.clear();
        inner.next_id = 0;
    }
}
