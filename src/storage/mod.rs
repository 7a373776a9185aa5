use leptos::logging::warn;
use serde::{Deserialize, Serialize};

/// Autosaved document pages. The key predates this crate; keeping it means
/// documents saved by earlier builds restore unchanged.
pub(crate) const PAGES_KEY: &str = "urdu_pro_editor_pages";

pub(crate) const SIDEBAR_OPEN_KEY: &str = "qalam_sidebar_open";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Decodes a persisted page list. All-or-nothing: anything but a JSON
/// array of at least one string is treated as absent.
pub(crate) fn decode_saved_pages(raw: &str) -> Option<Vec<String>> {
    let pages: Vec<String> = serde_json::from_str(raw).ok()?;
    if pages.is_empty() {
        None
    } else {
        Some(pages)
    }
}

/// The autosaved document, or `None` when nothing usable is stored. A
/// malformed value is discarded with a warning; the caller starts from a
/// single empty page.
pub(crate) fn load_saved_pages() -> Option<Vec<String>> {
    let raw = local_storage()?.get_item(PAGES_KEY).ok().flatten()?;
    match decode_saved_pages(&raw) {
        Some(pages) => Some(pages),
        None => {
            warn!("autosave: discarding malformed saved document");
            None
        }
    }
}

/// Snapshots the full page sequence. Write failures (quota, storage
/// disabled) are ignored; the next tick retries anyway.
pub(crate) fn save_pages(pages: &[String]) {
    save_json_to_storage(PAGES_KEY, &pages);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_a_page_array() {
        let pages = decode_saved_pages(r#"["<p>a</p>", "<p><br/></p>"]"#).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], "<p>a</p>");
    }

    #[test]
    fn decode_rejects_malformed_values() {
        assert_eq!(decode_saved_pages("not json"), None);
        assert_eq!(decode_saved_pages("{\"pages\": []}"), None);
        assert_eq!(decode_saved_pages("[1, 2, 3]"), None);
        assert_eq!(decode_saved_pages("[\"ok\", 5]"), None);
        assert_eq!(decode_saved_pages("null"), None);
    }

    #[test]
    fn decode_rejects_an_empty_array() {
        assert_eq!(decode_saved_pages("[]"), None);
    }

    #[test]
    fn round_trips_through_json() {
        let pages = vec!["<p>ایک</p>".to_string(), "<p>دو</p>".to_string()];
        let json = serde_json::to_string(&pages).unwrap();
        assert_eq!(decode_saved_pages(&json).unwrap(), pages);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn pages_round_trip_through_local_storage() {
        let pages = vec!["<p>صفحہ</p>".to_string(), "<p><br/></p>".to_string()];
        save_pages(&pages);
        assert_eq!(load_saved_pages(), Some(pages));
    }

    #[wasm_bindgen_test]
    fn corrupted_value_restores_to_nothing() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.set_item(PAGES_KEY, "{corrupted").unwrap();
        assert_eq!(load_saved_pages(), None);

        storage.set_item(PAGES_KEY, "[]").unwrap();
        assert_eq!(load_saved_pages(), None);
    }

    #[wasm_bindgen_test]
    fn ui_preferences_round_trip() {
        save_json_to_storage(SIDEBAR_OPEN_KEY, &true);
        assert_eq!(load_json_from_storage::<bool>(SIDEBAR_OPEN_KEY), Some(true));
    }
}
