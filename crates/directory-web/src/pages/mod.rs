//! Page bodies and the shared shell

pub mod dashboard;
pub mod detail;
pub mod layout;
pub mod listing;
pub mod login;
pub mod not_found;

pub use dashboard::{CatalogPanel, RANDOM_EMPLOYEE_FAILED, render_dashboard, render_random_employee};
pub use detail::{render_detail, render_edit_form, render_employee_not_found};
pub use layout::render_page;
pub use listing::{ListingBody, ListingPage, listing_href, render_listing};
pub use login::render_login;
pub use not_found::render_not_found;
