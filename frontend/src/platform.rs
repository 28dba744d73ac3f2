//! Browser glue: URL, history, timers, theme variables and local storage.

use errandmate_shared::Theme;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlElement};

const THEME_KEY: &str = "errandmate.theme";

pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

pub fn push_path(path: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .is_err()
        {
            debug_log!("pushState rejected for {}", path);
        }
    }
}

/// Resolves after `ms` milliseconds.
pub async fn delay(ms: i32) -> Result<(), String> {
    let window = window().ok_or("no window")?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled.map_err(|_| "failed to schedule timer")?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| "timer rejected".to_string())
}

/// Writes the palette onto `<html>` as CSS variables plus a `data-theme` attribute.
pub fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root.set_attribute("data-theme", theme.key()).is_err() {
        debug_log!("could not tag document with theme {}", theme);
    }
    if let Some(element) = root.dyn_ref::<HtmlElement>() {
        let style = element.style();
        let rejected: Vec<&str> = theme
            .palette()
            .css_variables()
            .into_iter()
            .filter(|(name, value)| style.set_property(name, value).is_err())
            .map(|(name, _)| name)
            .collect();
        if !rejected.is_empty() {
            debug_log!("theme {} could not set {}", theme, rejected.join(", "));
        }
    }
}

pub fn stored_theme() -> Option<Theme> {
    let storage = window()?.local_storage().ok()??;
    let key = storage.get_item(THEME_KEY).ok()??;
    match key.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            debug_log!("ignoring stored theme: {}", err);
            None
        }
    }
}

/// Best effort; private browsing may refuse storage.
pub fn store_theme(theme: Theme) {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|storage| storage.set_item(THEME_KEY, theme.key()));
    if !matches!(stored, Some(Ok(()))) {
        debug_log!("theme {} not persisted", theme);
    }
}

/// Back/forward buttons reload the shell so the router starts from the new URL.
pub fn setup_popstate_listener() {
    let callback = Closure::wrap(Box::new(|_event: web_sys::PopStateEvent| {
        if let Some(window) = window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                debug_log!("Route changed to: {}", pathname);
            }
            if let Err(err) = location.reload() {
                debug_log!("reload after popstate failed: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(_)>);

    let attached = window().map(|w| {
        w.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
    });
    if !matches!(attached, Some(Ok(()))) {
        debug_log!("popstate listener not attached");
    }

    callback.forget();
}
