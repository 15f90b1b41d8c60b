//! Navigation frame shared by every page

use crate::html::escape;
use crate::store::UiState;
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:0;background:#f5f5f5;color:#000}\
body.dark{background:#141414;color:#fff}\
header{display:flex;gap:16px;align-items:center;padding:12px 24px;background:#001529;color:#fff}\
header a{color:#fff}main{padding:24px}\
.card{background:#fff;border:1px solid #f0f0f0;padding:16px;margin-bottom:16px}\
body.dark .card{background:#1f1f1f;border-color:#333}\
.flash{background:#f6ffed;border:1px solid #b7eb8f;padding:8px 16px;margin-bottom:16px}\
body.dark .flash{background:#162312;border-color:#274916}\
.error{color:#ff4d4f}.selected{font-weight:bold}\
.badge{background:#1677ff;color:#fff;border-radius:4px;padding:0 6px;margin-left:8px}\
.avatar{width:64px;height:64px;border-radius:50%}";

/// Wrap `body` in the document shell
///
/// The header carries navigation, the theme toggle (returning to
/// `current_path`) and the login status. `flash` is shown above the content.
pub fn render_page(
    title: &str,
    state: &UiState,
    flash: Option<&str>,
    current_path: &str,
    body: &str,
) -> String {
    let mut out = String::with_capacity(body.len() + 2048);
    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} - Employee Directory</title><style>{STYLE}</style></head>\
         <body class=\"{theme}\"><header>\
         <nav><a href=\"/dashboard\">Dashboard</a> <a href=\"/employees\">Employees</a></nav>\
         <form method=\"post\" action=\"/session/theme\" class=\"theme-toggle\">\
         <input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\
         <span>Theme</span> <button type=\"submit\">{toggle_label}</button></form>",
        title = escape(title),
        theme = state.theme,
        return_to = escape(current_path),
        toggle_label = if state.theme.is_dark() { "Light" } else { "Dark" },
    );

    if state.is_logged_in {
        let _ = write!(
            out,
            "<div class=\"user\"><span>Welcome, {}</span>\
             <form method=\"post\" action=\"/session/logout\"><button type=\"submit\">Logout</button></form></div>",
            escape(&state.user_name)
        );
    } else {
        out.push_str(
            "<div class=\"user\"><span>You are not logged in</span> <a href=\"/login\">Login</a></div>",
        );
    }

    out.push_str("</header><main>");
    if let Some(message) = flash {
        let _ = write!(out, "<div class=\"flash\">{}</div>", escape(message));
    }
    out.push_str(body);
    out.push_str("</main></body></html>");
    out
}
