pub(crate) mod autosave;

use crate::engine::{HeadingEntry, PageSettings, EMPTY_PAGE};
use crate::storage::{load_json_from_storage, load_saved_pages, SIDEBAR_OPEN_KEY};
use leptos::prelude::*;

/// Default zoom percentage; "fit width" in the View menu.
pub(crate) const FIT_WIDTH_ZOOM: i32 = 120;
pub(crate) const MIN_ZOOM: i32 = 50;
pub(crate) const MAX_ZOOM: i32 = 200;
pub(crate) const ZOOM_STEP: i32 = 10;

#[derive(Clone, Copy)]
pub(crate) struct EditorState {
    /// The document: serialized page fragments plus the active index.
    /// These two mirror the engine's `Document`; the editor materializes
    /// one around them for each pass.
    pub pages: RwSignal<Vec<String>>,
    pub active_page: RwSignal<usize>,

    pub settings: RwSignal<PageSettings>,

    /// View state.
    pub zoom: RwSignal<i32>,
    pub rtl: RwSignal<bool>,
    pub sidebar_open: RwSignal<bool>,
    pub page_setup_open: RwSignal<bool>,

    /// Derived from the document after every change.
    pub word_count: RwSignal<usize>,
    pub char_count: RwSignal<usize>,
    pub headings: RwSignal<Vec<HeadingEntry>>,

    /// Toolbar state.
    pub font_name: RwSignal<String>,
    pub font_size: RwSignal<String>,
    pub active_formats: RwSignal<Vec<String>>,

    /// Set by the autosave controller after each successful snapshot.
    pub last_saved_ms: RwSignal<Option<i64>>,
}

impl EditorState {
    pub fn new() -> Self {
        let pages = load_saved_pages().unwrap_or_else(|| vec![EMPTY_PAGE.to_string()]);
        let sidebar_open = load_json_from_storage::<bool>(SIDEBAR_OPEN_KEY).unwrap_or(false);

        Self {
            pages: RwSignal::new(pages),
            active_page: RwSignal::new(0),
            settings: RwSignal::new(PageSettings::default()),
            zoom: RwSignal::new(100),
            rtl: RwSignal::new(true),
            sidebar_open: RwSignal::new(sidebar_open),
            page_setup_open: RwSignal::new(false),
            word_count: RwSignal::new(0),
            char_count: RwSignal::new(0),
            headings: RwSignal::new(vec![]),
            font_name: RwSignal::new("Jameel Noori Nastaleeq".to_string()),
            font_size: RwSignal::new("4".to_string()),
            active_formats: RwSignal::new(vec![]),
            last_saved_ms: RwSignal::new(None),
        }
    }

    pub fn zoom_in(&self) {
        self.zoom.update(|z| *z = (*z + ZOOM_STEP).min(MAX_ZOOM));
    }

    pub fn zoom_out(&self) {
        self.zoom.update(|z| *z = (*z - ZOOM_STEP).max(MIN_ZOOM));
    }

    /// Flips the sidebar and persists the preference.
    pub fn toggle_sidebar(&self) {
        let open = !self.sidebar_open.get_untracked();
        self.sidebar_open.set(open);
        crate::storage::save_json_to_storage(SIDEBAR_OPEN_KEY, &open);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct EditorContext(pub EditorState);
