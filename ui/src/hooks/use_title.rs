use yew::prelude::*;

/// Show `title` in the browser tab. Pages set their own, so nothing is
/// restored on unmount.
#[hook]
pub fn use_title(title: &str) {
    use_effect_with(title.to_owned(), |title| {
        match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document.set_title(title),
            None => tracing::warn!(%title, "no document to title"),
        }
    });
}
