//! Employee detail page, local-only edit form and the missing-record page

use crate::components::render_detail_card;
use crate::html::escape;
use directory_core::Employee;
use std::fmt::Write;

/// Detail body with Back, Edit and Delete actions
pub fn render_detail(employee: &Employee) -> String {
    format!(
        "<div class=\"detail\">\
         <div class=\"actions\"><a class=\"btn\" href=\"/employees\">Back</a>\
         <a class=\"btn btn-primary\" href=\"/employees/{id}/edit\">Edit</a>\
         <form method=\"post\" action=\"/employees/{id}/delete\" class=\"inline\">\
         <button type=\"submit\" class=\"btn btn-danger\">Delete</button></form></div>{card}</div>",
        id = employee.id,
        card = render_detail_card(employee),
    )
}

/// Edit form pre-populated from `employee`
pub fn render_edit_form(employee: &Employee) -> String {
    let age = employee.age.map(|age| age.to_string()).unwrap_or_default();
    let fields = [
        ("first_name", "First Name", employee.first_name.as_str()),
        ("last_name", "Last Name", employee.last_name.as_str()),
        ("email", "Email", employee.email.as_str()),
        ("age", "Age", age.as_str()),
        ("address", "Address", employee.street()),
        ("company", "Company", employee.company_name()),
        ("department", "Department", employee.company_department()),
        ("phone", "Phone", employee.phone.as_str()),
    ];

    let mut out = format!(
        "<div class=\"card\"><h2>Edit Employee</h2>\
         <form method=\"post\" action=\"/employees/{}/edit\" class=\"edit-form\">",
        employee.id
    );
    for (name, label, value) in fields {
        let _ = write!(
            out,
            "<label>{label}<input name=\"{name}\" value=\"{}\"></label>",
            escape(value)
        );
    }
    let _ = write!(
        out,
        "<button type=\"submit\" class=\"btn btn-primary\">Save</button> \
         <a class=\"btn\" href=\"/employees/{}\">Cancel</a></form></div>",
        employee.id
    );
    out
}

/// Body for an identifier the remote does not know
pub fn render_employee_not_found() -> &'static str {
    "<div class=\"not-found\"><h2>Employee not found</h2>\
     <a class=\"btn\" href=\"/employees\">Back</a></div>"
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use directory_core::{Address, Company};

    fn employee() -> Employee {
        Employee {
            id: 12,
            first_name: "Liam".to_string(),
            last_name: "Garcia".to_string(),
            email: "liam@x.dummyjson.com".to_string(),
            age: Some(41),
            address: Some(Address {
                address: "1 Elm".to_string(),
                city: "Austin".to_string(),
            }),
            company: Some(Company {
                name: "Acme".to_string(),
                department: "Support".to_string(),
            }),
            ..Employee::default()
        }
    }

    #[test]
    fn test_detail_actions() {
        let html = render_detail(&employee());

        assert!(html.contains("href=\"/employees\">Back"));
        assert!(html.contains("href=\"/employees/12/edit\""));
        assert!(html.contains("action=\"/employees/12/delete\""));
        assert!(html.contains("Liam Garcia"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let html = render_edit_form(&employee());

        assert!(html.contains("name=\"first_name\" value=\"Liam\""));
        assert!(html.contains("name=\"age\" value=\"41\""));
        assert!(html.contains("name=\"address\" value=\"1 Elm\""));
        assert!(html.contains("name=\"company\" value=\"Acme\""));
        assert!(html.contains("name=\"department\" value=\"Support\""));
        assert!(html.contains("action=\"/employees/12/edit\""));
    }

    #[test]
    fn test_not_found_body() {
        assert!(render_employee_not_found().contains("Employee not found"));
    }
}
