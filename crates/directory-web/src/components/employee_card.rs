//! Employee cards for the detail page and the random employee panel

use crate::html::escape;
use directory_core::Employee;

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// Full record card: identity plus descriptive fields
///
/// Missing nested fields render blank.
pub fn render_detail_card(employee: &Employee) -> String {
    let age = employee.age.map(|age| age.to_string()).unwrap_or_default();

    format!(
        "<div class=\"card employee-card\">\
         <div class=\"card-header\"><img class=\"avatar\" src=\"{image}\" alt=\"\">\
         <div><h2>{name}</h2><p class=\"email\">{email}</p></div></div>\
         <dl class=\"descriptions\">\
         <dt>Phone</dt><dd>{phone}</dd>\
         <dt>Age</dt><dd>{age}</dd>\
         <dt>Address</dt><dd>{address}</dd>\
         <dt>Company</dt><dd>{company}</dd>\
         <dt>Department</dt><dd>{department}</dd>\
         <dt>University</dt><dd>{university}</dd>\
         </dl></div>",
        image = escape(&employee.image),
        name = escape(&employee.full_name()),
        email = escape(&employee.email),
        phone = escape(&employee.phone),
        address = escape(&employee.address_line()),
        company = escape(employee.company_name()),
        department = escape(employee.company_department()),
        university = escape(&employee.university),
    )
}

/// Compact profile for the dashboard's random employee panel
pub fn render_profile_card(employee: &Employee) -> String {
    format!(
        "<div class=\"profile\"><img class=\"avatar\" src=\"{image}\" alt=\"\">\
         <div class=\"profile-meta\"><h4>{name}</h4><p>{email}</p>\
         <p><strong>Company:</strong> {company}</p>\
         <p><strong>Department:</strong> {department}</p>\
         <a class=\"btn btn-primary\" href=\"/employees/{id}\">View Details</a></div></div>",
        image = escape(&employee.image),
        name = escape(&employee.full_name()),
        email = escape(&employee.email),
        company = escape(or_na(employee.company_name())),
        department = escape(or_na(employee.company_department())),
        id = employee.id,
    )
}
