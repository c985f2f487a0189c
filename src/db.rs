//! Application state shared across request handlers.

use crate::town::controller::TownController;
use crate::town::store::TownStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub controller: TownController,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: TownController::with_store(Arc::new(TownStore::new())),
        }
    }
}
