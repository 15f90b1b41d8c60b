//! Loading placeholders for panels filled after the page renders

use crate::html::escape;

/// Loading spinner
pub fn render_loading() -> &'static str {
    r#"<div class="loading"><div class="spinner"></div><p>Loading...</p></div>"#
}

/// Panel that shows a spinner and then swaps in the fragment served at `url`
///
/// The swap happens in the browser after the shell renders, so a slow
/// fragment never delays the rest of the page. `failure` is shown when the
/// fragment cannot be fetched at all.
pub fn render_deferred(id: &str, url: &str, failure: &str) -> String {
    let id = escape(id);
    let url = escape(url);
    let failure = escape(failure);
    format!(
        "<div id=\"{id}\" class=\"deferred\" data-src=\"{url}\">{loading}</div>\
         <script>(function(){{var el=document.getElementById('{id}');\
         fetch(el.dataset.src).then(function(r){{return r.text();}})\
         .then(function(html){{el.innerHTML=html;}})\
         .catch(function(){{el.innerHTML='<p class=\"error\">{failure}</p>';}});}})();</script>",
        loading = render_loading()
    )
}
