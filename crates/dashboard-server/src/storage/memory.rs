//! In-memory dashboard store guarded by a single mutex

use crate::error::{StoreError, StoreResult};
use crate::id::generate_id;
use dashboard_types::{Dashboard, DashboardList};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Number of dashboards returned per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Insertion-ordered collection of dashboards.
///
/// Every operation holds the lock for its whole duration, so operations are
/// totally ordered and reads always observe the latest writes. Callers only
/// ever receive copies of stored records.
pub struct Store {
    dashboards: Mutex<Vec<Dashboard>>,
    page_size: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            dashboards: Mutex::new(Vec::new()),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // No operation can panic halfway through a mutation, so a poisoned
    // guard still holds a consistent collection.
    fn lock(&self) -> MutexGuard<'_, Vec<Dashboard>> {
        self.dashboards.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a dashboard and append it to the end of the collection
    pub fn create(
        &self,
        name: String,
        description: String,
        project: String,
    ) -> StoreResult<Dashboard> {
        if name.is_empty() {
            return Err(StoreError::Validation("Name is required".to_string()));
        }
        if project.is_empty() {
            return Err(StoreError::Validation("Project is required".to_string()));
        }

        let dashboard = Dashboard {
            id: generate_id(),
            name,
            description,
            project,
        };

        let mut dashboards = self.lock();
        dashboards.push(dashboard.clone());
        debug!("Created dashboard {}", dashboard.id);

        Ok(dashboard)
    }

    /// Get a dashboard by id
    pub fn get(&self, id: &str) -> StoreResult<Dashboard> {
        self.lock()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Overwrite the name and/or description of a dashboard.
    ///
    /// `None` leaves the field unchanged. The id and project never change.
    pub fn update(
        &self,
        id: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> StoreResult<Dashboard> {
        if name.as_deref() == Some("") {
            return Err(StoreError::Validation("Name cannot be empty".to_string()));
        }

        let mut dashboards = self.lock();
        let dashboard = dashboards
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = name {
            dashboard.name = name;
        }
        if let Some(description) = description {
            dashboard.description = description;
        }
        debug!("Updated dashboard {}", id);

        Ok(dashboard.clone())
    }

    /// Remove a dashboard, keeping the order of the others
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut dashboards = self.lock();
        let index = dashboards
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        dashboards.remove(index);
        debug!("Deleted dashboard {}", id);

        Ok(())
    }

    /// Return one page starting at offset `cursor`.
    ///
    /// The cursor is a raw offset into the live collection, so creates and
    /// deletes between calls can shift records across page boundaries.
    pub fn list(&self, cursor: usize) -> DashboardList {
        let dashboards = self.lock();

        let page = dashboards
            .iter()
            .skip(cursor)
            .take(self.page_size)
            .cloned()
            .collect();

        let end = cursor.saturating_add(self.page_size);
        let next = (end < dashboards.len()).then_some(end);

        DashboardList {
            dashboards: page,
            next,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
