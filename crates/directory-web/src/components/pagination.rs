//! Pagination controls for navigating through pages

use crate::html::escape;
use directory_query::PageWindow;
use std::fmt::Write;

/// Previous / "Page X of Y" / Next controls
///
/// `link` maps a page number to its URL. Unavailable directions render as
/// disabled buttons.
pub fn render_pagination(window: &PageWindow, link: impl Fn(usize) -> String) -> String {
    let mut out = String::from("<div class=\"pagination\">");

    match window.prev_page() {
        Some(page) => {
            let _ = write!(
                out,
                "<a class=\"pagination-btn\" href=\"{}\">Previous</a>",
                escape(&link(page))
            );
        }
        None => out.push_str("<button class=\"pagination-btn\" disabled>Previous</button>"),
    }

    let _ = write!(
        out,
        "<span class=\"pagination-info\">Page {} of {}</span>",
        window.page, window.total_pages
    );

    match window.next_page() {
        Some(page) => {
            let _ = write!(
                out,
                "<a class=\"pagination-btn\" href=\"{}\">Next</a>",
                escape(&link(page))
            );
        }
        None => out.push_str("<button class=\"pagination-btn\" disabled>Next</button>"),
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use directory_query::Paginator;

    #[test]
    fn test_middle_page_links_both_ways() {
        let window = Paginator::new(10).unwrap().window(35, 2);
        let html = render_pagination(&window, |p| format!("/employees?page={p}"));

        assert!(html.contains("href=\"/employees?page=1\">Previous"));
        assert!(html.contains("Page 2 of 4"));
        assert!(html.contains("href=\"/employees?page=3\">Next"));
    }

    #[test]
    fn test_single_page_disables_both() {
        let window = Paginator::new(10).unwrap().window(0, 1);
        let html = render_pagination(&window, |p| format!("?page={p}"));

        assert!(html.contains("disabled>Previous"));
        assert!(html.contains("Page 1 of 1"));
        assert!(html.contains("disabled>Next"));
    }

    #[test]
    fn test_link_is_escaped() {
        let window = Paginator::new(1).unwrap().window(2, 1);
        let html = render_pagination(&window, |p| format!("/e?q=a&page={p}"));
        assert!(html.contains("/e?q=a&amp;page=2"));
    }
}
