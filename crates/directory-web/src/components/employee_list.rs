//! Employee list component for displaying employee records

use crate::html::escape;
use directory_core::Employee;
use std::fmt::Write;

/// Paged table: Name, Email, University, Department, Action
pub fn render_employee_table(employees: &[&Employee]) -> String {
    let mut out = String::from(
        "<table class=\"employee-table\"><thead><tr>\
         <th>Name</th><th>Email</th><th>University</th><th>Department</th><th>Action</th>\
         </tr></thead><tbody>",
    );

    if employees.is_empty() {
        out.push_str("<tr><td colspan=\"5\" class=\"empty\">No employees found</td></tr>");
    }

    for employee in employees {
        let department = if employee.departement.is_empty() {
            "-"
        } else {
            employee.departement.as_str()
        };
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a class=\"btn btn-primary\" href=\"/employees/{}\">View Details</a></td></tr>",
            escape(&employee.full_name()),
            escape(&employee.email),
            escape(&employee.university),
            escape(department),
            employee.id,
        );
    }

    out.push_str("</tbody></table>");
    out
}

/// Incrementally loaded list items with name and "email • university"
pub fn render_employee_items(employees: &[&Employee]) -> String {
    let mut out = String::from("<ul class=\"employee-list\">");

    if employees.is_empty() {
        out.push_str("<li class=\"empty\">No employees found</li>");
    }

    for employee in employees {
        let _ = write!(
            out,
            "<li class=\"employee-item\"><div class=\"employee-meta\">\
             <span class=\"employee-name\">{}</span>\
             <span class=\"employee-description\">{} \u{2022} {}</span></div>\
             <a class=\"btn btn-primary\" href=\"/employees/{}\">View Details</a></li>",
            escape(&employee.full_name()),
            escape(&employee.email),
            escape(&employee.university),
            employee.id,
        );
    }

    out.push_str("</ul>");
    out
}
