//! Dashboard page: employee count, department list and a random profile

use crate::components::{render_deferred, render_pagination, render_profile_card};
use crate::html::{escape, href};
use directory_core::{Department, Employee};
use directory_query::PageWindow;
use std::fmt::Write;

/// Message shown when the random employee cannot be loaded
pub const RANDOM_EMPLOYEE_FAILED: &str = "Failed to load random employee.";

/// Department panel contents for one render
#[derive(Debug)]
pub struct CatalogPanel<'a> {
    /// Departments on the current page
    pub departments: &'a [Department],
    /// Page metadata, `None` when the list is not paginated
    pub window: Option<PageWindow>,
    /// Currently selected slug
    pub selected: &'a str,
}

/// Dashboard body
pub fn render_dashboard(total_employees: u64, catalog: &CatalogPanel<'_>) -> String {
    let mut out = String::from("<div class=\"dashboard\"><h2>Dashboard</h2><div class=\"dashboard-grid\">");

    let _ = write!(
        out,
        "<div class=\"card dashboard-card\"><h3>Total Employees</h3>\
         <p class=\"statistic\">{total_employees}</p>\
         <p class=\"secondary\">User count fetched from API.</p></div>"
    );

    out.push_str(
        "<div class=\"card dashboard-card\"><h3>Departments List</h3>\
         <p><strong>Click a department to filter</strong></p><ul class=\"department-list\">",
    );
    if catalog.departments.is_empty() {
        out.push_str("<li class=\"empty\">No departments</li>");
    }
    for department in catalog.departments {
        let selected = department.slug == catalog.selected;
        let _ = write!(
            out,
            "<li{class}><form method=\"post\" action=\"/dashboard/department\">\
             <input type=\"hidden\" name=\"slug\" value=\"{slug}\">\
             <button type=\"submit\" class=\"link\">{label}</button>{badge}</form></li>",
            class = if selected { " class=\"selected\"" } else { "" },
            slug = escape(&department.slug),
            label = escape(department.label()),
            badge = if selected { "<span class=\"badge\">Selected</span>" } else { "" },
        );
    }
    out.push_str("</ul>");
    if let Some(window) = &catalog.window {
        out.push_str(&render_pagination(window, |page| {
            href("/dashboard", &[("cat_page", page.to_string())])
        }));
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        "<div class=\"card dashboard-card\"><h3>Random Employee Profile</h3>{}</div>",
        render_deferred("random-employee", "/dashboard/random-employee", RANDOM_EMPLOYEE_FAILED)
    );

    out.push_str("</div></div>");
    out
}

/// Random employee panel contents once the fetch settled
pub fn render_random_employee(employee: Option<&Employee>) -> String {
    employee.map_or_else(
        || format!("<p class=\"error\">{RANDOM_EMPLOYEE_FAILED}</p>"),
        render_profile_card,
    )
}
