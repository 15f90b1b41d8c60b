//! Reusable HTML fragments

pub mod employee_card;
pub mod employee_list;
pub mod loading;
pub mod pagination;

pub use employee_card::{render_detail_card, render_profile_card};
pub use employee_list::{render_employee_items, render_employee_table};
pub use loading::{render_deferred, render_loading};
pub use pagination::render_pagination;
