//! 404 Not Found page

/// Body for unknown routes
pub fn render_not_found() -> &'static str {
    "<div class=\"not-found\"><h2>Page Not Found</h2>\
     <p>The page you are looking for does not exist.</p>\
     <a href=\"/dashboard\" class=\"btn btn-primary\">Return to Dashboard</a></div>"
}
