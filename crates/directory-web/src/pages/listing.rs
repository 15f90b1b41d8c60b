//! Employee listing page with search, department filter and two presentation modes

use crate::components::{render_employee_items, render_employee_table, render_pagination};
use crate::html::{escape, href};
use directory_core::{Department, Employee};
use directory_query::{IncrementalCursor, PageWindow, PresentationMode};
use std::fmt::Write;

/// Rendered portion of the filtered view
#[derive(Debug)]
pub enum ListingBody<'a> {
    /// One page of the table
    Paged {
        /// Rows on the page
        rows: Vec<&'a Employee>,
        /// Page metadata
        window: PageWindow,
    },
    /// Visible prefix of the list
    Incremental {
        /// Revealed items
        items: Vec<&'a Employee>,
        /// Cursor that produced `items`
        cursor: IncrementalCursor,
        /// Length of the whole filtered view
        total: usize,
    },
}

impl ListingBody<'_> {
    const fn mode(&self) -> PresentationMode {
        match self {
            Self::Paged { .. } => PresentationMode::Paged,
            Self::Incremental { .. } => PresentationMode::Incremental,
        }
    }
}

/// Everything the listing renders
#[derive(Debug)]
pub struct ListingPage<'a> {
    /// Current search text
    pub search: &'a str,
    /// Selected department slug
    pub selected: &'a str,
    /// Department catalog for the selector
    pub departments: &'a [Department],
    /// Rendered rows
    pub body: ListingBody<'a>,
}

/// Listing URL preserving the search text
pub fn listing_href(search: &str, mode: PresentationMode, extra: Option<(&str, usize)>) -> String {
    let mut params = vec![("q", search.to_string()), ("mode", mode.as_str().to_string())];
    if let Some((key, value)) = extra {
        params.push((key, value.to_string()));
    }
    href("/employees", &params)
}

/// Listing body
pub fn render_listing(page: &ListingPage<'_>) -> String {
    let mode = page.body.mode();
    let search = escape(page.search);
    let mut out = String::from("<div class=\"card\"><h2>Employees List</h2><div class=\"controls\">");

    let visible_field = match &page.body {
        ListingBody::Incremental { cursor, .. } => format!(
            "<input type=\"hidden\" name=\"visible\" value=\"{}\">",
            cursor.visible()
        ),
        ListingBody::Paged { .. } => String::new(),
    };
    let _ = write!(
        out,
        "<form method=\"get\" action=\"/employees\" class=\"search\">\
         <input type=\"search\" name=\"q\" value=\"{search}\" placeholder=\"Search by name\">\
         <input type=\"hidden\" name=\"mode\" value=\"{mode}\">{visible_field}\
         <button type=\"submit\">Search</button></form>"
    );

    let _ = write!(
        out,
        "<form method=\"post\" action=\"/employees/department\" class=\"department-filter\">\
         <input type=\"hidden\" name=\"q\" value=\"{search}\">\
         <input type=\"hidden\" name=\"mode\" value=\"{mode}\">{visible_field}\
         <select name=\"department\" onchange=\"this.form.submit()\">\
         <option value=\"\"{}>All departments</option>",
        if page.selected.is_empty() { " selected" } else { "" },
    );
    for department in page.departments {
        let _ = write!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape(&department.slug),
            if department.slug == page.selected { " selected" } else { "" },
            escape(department.label()),
        );
    }
    out.push_str("</select><button type=\"submit\">Filter</button></form>");

    let _ = write!(
        out,
        "<a class=\"mode-toggle\" href=\"{}\">Use Infinite Scroll: {}</a></div>",
        escape(&listing_href(page.search, mode.other(), None)),
        if mode == PresentationMode::Incremental { "On" } else { "Off" },
    );

    match &page.body {
        ListingBody::Paged { rows, window } => {
            out.push_str(&render_employee_table(rows));
            out.push_str(&render_pagination(window, |p| {
                listing_href(page.search, PresentationMode::Paged, Some(("page", p)))
            }));
        }
        ListingBody::Incremental { items, cursor, total } => {
            out.push_str(&render_employee_items(items));
            let _ = write!(
                out,
                "<p class=\"secondary\">Showing {} of {}</p>",
                items.len(),
                total
            );
            if cursor.has_more(*total) {
                let _ = write!(
                    out,
                    "<a class=\"btn load-more\" href=\"{}\">Load more</a>",
                    escape(&listing_href(
                        page.search,
                        PresentationMode::Incremental,
                        Some(("visible", cursor.next().visible())),
                    ))
                );
            }
        }
    }

    out.push_str("</div>");
    out
}
