//! Login form

use crate::html::escape;

/// Name-entry form; `error` is shown above the field
pub fn render_login(name: &str, error: Option<&str>) -> String {
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape(message)))
        .unwrap_or_default();

    format!(
        "<div class=\"card login\"><h2>Login</h2>{error}\
         <form method=\"post\" action=\"/session/login\">\
         <input name=\"name\" value=\"{}\" placeholder=\"Your name\" required>\
         <button type=\"submit\" class=\"btn btn-primary\">Login</button></form></div>",
        escape(name)
    )
}
