//! Search and department filtering over the employee collection

use directory_core::Employee;
use serde::{Deserialize, Serialize};

/// Inputs of a filtered view besides the collection itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Free text matched against the full name
    pub search: String,
    /// Department slug; empty matches every employee
    pub department: String,
}

impl ViewQuery {
    /// Create a query
    pub fn new(search: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            department: department.into(),
        }
    }

    /// Whether the query filters nothing
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.department.is_empty()
    }

    /// Compiled predicate for this query
    #[must_use]
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.search, &self.department)
    }
}

/// Predicate with the search text lowercased once
#[derive(Debug, Clone)]
pub struct Matcher<'q> {
    needle: String,
    department: &'q str,
}

impl<'q> Matcher<'q> {
    /// Compile a predicate from raw search text and a department slug
    #[must_use]
    pub fn new(search_text: &str, department_slug: &'q str) -> Self {
        Self {
            needle: search_text.to_lowercase(),
            department: department_slug,
        }
    }

    /// Case-insensitive substring match on `"{first} {last}"`; empty search matches
    #[must_use]
    pub fn matches_name(&self, employee: &Employee) -> bool {
        self.needle.is_empty() || employee.full_name().to_lowercase().contains(&self.needle)
    }

    /// Exact tag equality; empty slug matches
    #[must_use]
    pub fn matches_department(&self, employee: &Employee) -> bool {
        self.department.is_empty() || employee.departement == self.department
    }

    /// Both filters
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_name(employee) && self.matches_department(employee)
    }
}

/// Derive the filtered view of `employees`
///
/// Keeps every employee whose full name contains `search_text`
/// (case-insensitive) and whose department tag equals `department_slug`.
/// Empty inputs disable their filter. Relative order is preserved and the
/// collection is never modified.
#[must_use]
pub fn compute_view<'a>(
    employees: &'a [Employee],
    search_text: &str,
    department_slug: &str,
) -> Vec<&'a Employee> {
    let matcher = Matcher::new(search_text, department_slug);
    employees.iter().filter(|e| matcher.matches(e)).collect()
}

/// Positions in `employees` that survive the filter, in order
#[must_use]
pub fn matching_indices(employees: &[Employee], query: &ViewQuery) -> Vec<usize> {
    let matcher = query.matcher();
    employees
        .iter()
        .enumerate()
        .filter_map(|(index, employee)| matcher.matches(employee).then_some(index))
        .collect()
}
