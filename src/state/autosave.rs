use crate::state::EditorState;
use crate::storage::save_pages;
use crate::util::now_ms;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Snapshot cadence for the whole document.
pub(crate) const AUTOSAVE_INTERVAL_MS: i32 = 15_000;

/// Periodic document autosave.
///
/// Responsibilities:
/// - snapshot the full page list every interval tick, dirty or not
/// - flush once more when the page is hidden for good
/// - release the timer and listener on editor teardown
///
/// Non-responsibilities:
/// - restore (EditorState seeds itself from storage on construction)
#[derive(Clone)]
pub(crate) struct AutosaveController {
    state: EditorState,
    interval_ms: i32,
    interval_id: RwSignal<Option<i32>>,
    pagehide_handle: StoredValue<Option<WindowListenerHandle>>,
}

impl AutosaveController {
    pub fn new(state: EditorState) -> Self {
        Self::with_interval(state, AUTOSAVE_INTERVAL_MS)
    }

    pub fn with_interval(state: EditorState, interval_ms: i32) -> Self {
        Self {
            state,
            interval_ms,
            interval_id: RwSignal::new(None),
            pagehide_handle: StoredValue::new(None),
        }
    }

    /// Saves the document right now and remembers when.
    pub fn flush(&self) {
        let pages = self.state.pages.get_untracked();
        save_pages(&pages);
        self.state.last_saved_ms.set(Some(now_ms()));
    }

    pub fn start(&self) {
        if self.interval_id.get_untracked().is_some() {
            return;
        }
        let Some(win) = web_sys::window() else {
            return;
        };

        let s2 = self.clone();
        let cb = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            s2.flush();
        }) as Box<dyn FnMut()>);

        let tid = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                self.interval_ms,
            )
            .unwrap_or(0);
        self.interval_id.set(Some(tid));
        cb.forget();

        let s3 = self.clone();
        let pagehide =
            window_event_listener(ev::pagehide, move |_ev: web_sys::PageTransitionEvent| {
                s3.flush();
            });
        self.pagehide_handle.set_value(Some(pagehide));
    }

    /// Clears the interval and the pagehide listener; the editor calls
    /// this from `on_cleanup`.
    pub fn stop(&self) {
        if let Some(tid) = self.interval_id.get_untracked() {
            if let Some(win) = web_sys::window() {
                win.clear_interval_with_handle(tid);
            }
        }
        self.interval_id.set(None);

        self.pagehide_handle.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.remove();
            }
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn flush_snapshots_the_document() {
        let state = EditorState::new();
        state.pages.set(vec!["<p>x</p>".to_string()]);

        let autosave = AutosaveController::new(state);
        autosave.flush();

        assert_eq!(
            crate::storage::load_saved_pages(),
            Some(vec!["<p>x</p>".to_string()])
        );
        assert!(state.last_saved_ms.get_untracked().is_some());
    }

    #[wasm_bindgen_test]
    fn start_is_idempotent_and_stop_clears() {
        let state = EditorState::new();
        let autosave = AutosaveController::with_interval(state, 60_000);

        autosave.start();
        let first = autosave.interval_id.get_untracked();
        assert!(first.is_some());

        autosave.start();
        assert_eq!(autosave.interval_id.get_untracked(), first);

        autosave.stop();
        assert_eq!(autosave.interval_id.get_untracked(), None);
    }
}
