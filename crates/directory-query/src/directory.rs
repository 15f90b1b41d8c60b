//! In-memory directory snapshot and derived views

use crate::filter::{ViewQuery, matching_indices};
use directory_core::{Department, Employee, EmployeeId};
use std::ops::Range;
use std::sync::Arc;

/// Employee collection and department catalog fetched together
///
/// Cloning is cheap; clones share the same collection, which is what the
/// view memo keys on.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    employees: Arc<[Employee]>,
    departments: Arc<[Department]>,
}

impl Directory {
    /// Build a snapshot
    #[must_use]
    pub fn new(employees: Vec<Employee>, departments: Vec<Department>) -> Self {
        Self {
            employees: employees.into(),
            departments: departments.into(),
        }
    }

    /// All employees in fetch order
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Department catalog
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Whether `slug` is in the catalog
    #[must_use]
    pub fn has_department(&self, slug: &str) -> bool {
        self.departments.iter().any(|d| d.slug == slug)
    }

    /// Employee by identifier
    #[must_use]
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Whether `other` shares this snapshot's collection
    #[must_use]
    pub fn same_collection(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.employees, &other.employees)
    }

    /// Derive the filtered view for `query` without memoization
    #[must_use]
    pub fn view(&self, query: &ViewQuery) -> FilteredView {
        FilteredView {
            source: Arc::clone(&self.employees),
            indices: matching_indices(&self.employees, query).into(),
        }
    }
}

/// Order-preserving selection over a shared collection
#[derive(Debug, Clone)]
pub struct FilteredView {
    source: Arc<[Employee]>,
    indices: Arc<[usize]>,
}

impl FilteredView {
    /// Number of selected employees
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected employees in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.indices.iter().filter_map(|&i| self.source.get(i))
    }

    /// Selected employees within `range` of the view (clamped)
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Vec<&Employee> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.indices
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .filter_map(|&i| self.source.get(i))
            .collect()
    }

    /// All selected employees
    #[must_use]
    pub fn to_vec(&self) -> Vec<&Employee> {
        self.iter().collect()
    }
}
