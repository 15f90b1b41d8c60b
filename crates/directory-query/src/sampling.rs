//! Fetch-time department tagging and random employee sampling

use directory_core::{Department, Employee, EmployeeId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Tag every employee with a uniformly chosen catalog slug
///
/// The catalog is an unrelated taxonomy, so the tag is an opaque filter
/// dimension. An empty catalog leaves every tag empty.
pub fn assign_departments<R>(employees: &mut [Employee], catalog: &[Department], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for employee in employees {
        employee.departement = catalog
            .choose(rng)
            .map(|department| department.slug.clone())
            .unwrap_or_default();
    }
}

/// Identifier drawn uniformly from `1..=max_id` (`max_id` of zero yields 1)
pub fn random_employee_id<R>(rng: &mut R, max_id: EmployeeId) -> EmployeeId
where
    R: Rng + ?Sized,
{
    rng.gen_range(1..=max_id.max(1))
}
