//! The document editor: a paginated `contenteditable` surface bound to
//! the pagination engine, with the Word-style chrome around it.

pub(crate) mod dom;
pub(crate) mod page_setup;
pub(crate) mod ruler;
pub(crate) mod sidebar;
pub(crate) mod toolbar;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::engine::{
    cm_to_px, doc_stats, nearest_page, scan_headings, visible_range, Document, HeadingEntry,
    PaginationEngine, PasteChunker, EMPTY_PAGE, PASTE_CHUNK_LINES, VIRTUALIZATION_RADIUS,
};
use crate::state::autosave::AutosaveController;
use crate::state::{EditorContext, EditorState};
use crate::util::clock_label;
use self::dom::SurfaceMeasurer;
use icons::{PanelLeft, ZoomIn, ZoomOut};
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_dom::helpers::request_animation_frame;

/// Formats mirrored into the toolbar via `queryCommandState` after every
/// command, keystroke and mouse-up.
const TRACKED_FORMATS: [&str; 10] = [
    "bold",
    "italic",
    "underline",
    "strikeThrough",
    "justifyLeft",
    "justifyCenter",
    "justifyRight",
    "justifyFull",
    "insertUnorderedList",
    "insertOrderedList",
];

/// Owns every mutation path into the document: command execution, input
/// and paste handling, the coalesced pagination schedule, and scroll
/// tracking. Copyable so event handlers can capture it freely.
///
/// Guard discipline: `pass_queued` coalesces pagination triggers onto one
/// animation frame; a non-`None` `paste` suppresses per-keystroke passes
/// while a chunked paste drains; the engine's own state machine refuses
/// re-entrant passes.
#[derive(Clone, Copy)]
pub(crate) struct PaginationController {
    state: EditorState,
    engine: StoredValue<PaginationEngine>,
    surface: NodeRef<html::Div>,
    workspace: NodeRef<html::Div>,
    pass_queued: StoredValue<bool>,
    paste: StoredValue<Option<PasteChunker>>,
}

impl PaginationController {
    fn new(state: EditorState) -> Self {
        Self {
            state,
            engine: StoredValue::new(PaginationEngine::default()),
            surface: NodeRef::new(),
            workspace: NodeRef::new(),
            pass_queued: StoredValue::new(false),
            paste: StoredValue::new(None),
        }
    }

    pub fn surface_ref(&self) -> NodeRef<html::Div> {
        self.surface
    }

    pub fn workspace_ref(&self) -> NodeRef<html::Div> {
        self.workspace
    }

    /// Copies the editable surface back into the page list.
    pub fn save_surface(&self) {
        let Some(surface) = self.surface.get_untracked() else {
            return;
        };
        let html = surface.inner_html();
        let html = if html.is_empty() {
            EMPTY_PAGE.to_string()
        } else {
            html
        };
        let active = self.state.active_page.get_untracked();
        self.state.pages.update(|pages| {
            if let Some(slot) = pages.get_mut(active) {
                *slot = html;
            }
        });
    }

    /// Recounts words/characters and rescans the heading outline.
    pub fn refresh_stats(&self) {
        let pages = self.state.pages.get_untracked();
        let stats = doc_stats(&pages);
        self.state.word_count.set(stats.words);
        self.state.char_count.set(stats.chars);
        self.state.headings.set(scan_headings(&pages));
    }

    /// Queues a pagination pass for the next animation frame. Triggers
    /// arriving before the frame fires collapse into that one pass.
    pub fn schedule_pass(&self) {
        self.save_surface();
        self.refresh_stats();

        if self.pass_queued.get_value() {
            return;
        }
        self.pass_queued.set_value(true);
        let ctl = *self;
        request_animation_frame(move || {
            ctl.pass_queued.set_value(false);
            ctl.run_pass_now();
        });
    }

    fn run_pass_now(&self) {
        let Some(surface) = self.surface.get_untracked() else {
            return;
        };
        let settings = self.state.settings.get_untracked();
        let Some(probe) = SurfaceMeasurer::for_surface(&surface, settings.content_width_px())
        else {
            return;
        };

        let mut doc = Document::from_pages(self.state.pages.get_untracked());
        doc.set_active(self.state.active_page.get_untracked());

        let report = self
            .engine
            .try_update_value(|engine| engine.run_pass(&mut doc, &settings, &probe))
            .unwrap_or_default();
        drop(probe);

        if report.hit_cap {
            warn!(
                "pagination: iteration cap hit on page {}, leaving it overflowing",
                doc.active() + 1
            );
        }
        if report.changed() {
            self.state.pages.set(doc.pages().to_vec());
            // The surface still shows the pre-migration content; rewrite
            // it with what stayed and park the caret after it.
            if let Some(html) = doc.page(doc.active()) {
                surface.set_inner_html(html);
            }
            dom::caret_to_end(&surface);
            self.refresh_stats();
        }
    }

    /// `input` events on the surface. Keystrokes that land while a paste
    /// drain is running are covered by the post-paste pass.
    pub fn on_input(&self) {
        if self.paste.with_value(|p| p.is_some()) {
            return;
        }
        self.schedule_pass();
    }

    /// Intercepts paste and drains the clipboard text one chunk per
    /// animation frame. Empty or unreadable clipboard data is a no-op.
    pub fn on_paste(&self, ev: web_sys::ClipboardEvent) {
        ev.prevent_default();
        let Some(text) = dom::clipboard_text(&ev) else {
            return;
        };
        if self.paste.with_value(|p| p.is_some()) {
            return;
        }
        self.paste
            .set_value(Some(PasteChunker::new(&text, PASTE_CHUNK_LINES)));
        self.pump_paste();
    }

    fn pump_paste(&self) {
        let ctl = *self;
        request_animation_frame(move || {
            let chunk = ctl
                .paste
                .try_update_value(|slot| slot.as_mut().and_then(|c| c.next_chunk_html()))
                .flatten();
            match chunk {
                Some(html) => {
                    dom::insert_html_at_caret(&html);
                    ctl.pump_paste();
                }
                None => {
                    // Drained: lift the guard, then paginate exactly once.
                    ctl.paste.set_value(None);
                    ctl.schedule_pass();
                }
            }
        });
    }

    pub fn exec(&self, command: &str) {
        dom::exec_command(command);
        self.after_command();
    }

    pub fn exec_with_value(&self, command: &str, value: &str) {
        dom::exec_command_with_value(command, value);
        self.after_command();
    }

    fn after_command(&self) {
        if let Some(surface) = self.surface.get_untracked() {
            let _ = surface.focus();
        }
        self.refresh_formats();
        self.schedule_pass();
    }

    /// Re-reads the active format set and current font from the browser.
    pub fn refresh_formats(&self) {
        let active: Vec<String> = TRACKED_FORMATS
            .iter()
            .filter(|cmd| dom::query_command_state(cmd))
            .map(|cmd| cmd.to_string())
            .collect();
        self.state.active_formats.set(active);

        if let Some(name) = dom::query_command_value("fontName") {
            self.state.font_name.set(name);
        }
        if let Some(size) = dom::query_command_value("fontSize") {
            self.state.font_size.set(size);
        }
    }

    pub fn insert_image(&self) {
        if let Some(url) = dom::prompt("Image URL") {
            self.exec_with_value("insertImage", &url);
        }
    }

    pub fn insert_link(&self) {
        if let Some(url) = dom::prompt("Link URL") {
            self.exec_with_value("createLink", &url);
        }
    }

    /// Page-break semantics: save the surface, move to the next page,
    /// creating it when the active page is the last one.
    pub fn insert_page_break(&self) {
        self.save_surface();
        let mut doc = Document::from_pages(self.state.pages.get_untracked());
        doc.set_active(self.state.active_page.get_untracked());
        let next = doc.advance();
        self.state.pages.set(doc.pages().to_vec());
        self.state.active_page.set(next);
    }

    /// File > New. Asks first; the document shrinks back to one empty
    /// page only here, never anywhere else.
    pub fn clear_document(&self) {
        if !dom::confirm("Clear all pages?") {
            return;
        }
        self.state.pages.set(vec![EMPTY_PAGE.to_string()]);
        self.state.active_page.set(0);
        if let Some(surface) = self.surface.get_untracked() {
            surface.set_inner_html(EMPTY_PAGE);
        }
        self.refresh_stats();
    }

    /// Sidebar navigation: activate the heading's page (pulling it into
    /// the virtualization window), then scroll and flash it once the
    /// render has settled.
    pub fn go_to_heading(&self, entry: &HeadingEntry) {
        if entry.page != self.state.active_page.get_untracked() {
            self.save_surface();
            self.state.active_page.set(entry.page);
        }
        let workspace = self.workspace;
        let id = entry.id.clone();
        dom::set_timeout(50, move || {
            if let Some(workspace) = workspace.get_untracked() {
                dom::stamp_heading_ids(&workspace);
            }
            dom::flash_heading(&id);
        });
    }

    /// Workspace scroll: the page whose center sits nearest the viewport
    /// center becomes active. No update when it already is.
    pub fn on_workspace_scroll(&self) {
        let Some(workspace) = self.workspace.get_untracked() else {
            return;
        };
        let (center, centers) = dom::page_centers(&workspace);
        let Some(nearest) = nearest_page(center, &centers) else {
            return;
        };
        if nearest != self.state.active_page.get_untracked() {
            self.save_surface();
            self.state.active_page.set(nearest);
        }
    }
}

#[component]
pub fn DocumentEditor() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = PaginationController::new(state);
    provide_context(ctl);

    let autosave = AutosaveController::new(state);
    autosave.start();
    {
        let autosave = autosave.clone();
        on_cleanup(move || autosave.stop());
    }

    // Load the active page into the surface whenever the surface mounts
    // or the active index moves. Focus is deferred a tick so the browser
    // has laid the element out.
    Effect::new(move |_| {
        let active = state.active_page.get();
        let Some(surface) = ctl.surface_ref().get() else {
            return;
        };
        let html = state
            .pages
            .with_untracked(|pages| pages.get(active).cloned())
            .unwrap_or_else(|| EMPTY_PAGE.to_string());
        surface.set_inner_html(&html);
        dom::set_timeout(10, move || dom::caret_to_end(&surface));
        ctl.refresh_stats();
    });

    let workspace_ref = ctl.workspace_ref();

    view! {
        <div class="flex flex-col h-screen bg-[#e9ecef] font-sans text-sm overflow-hidden text-[#252525]">
            {move || state.page_setup_open.get().then(|| view! { <page_setup::PageSetupDialog /> })}

            <toolbar::TitleBar />
            <toolbar::Toolbar />

            <div class="flex flex-1 overflow-hidden relative">
                {move || state.sidebar_open.get().then(|| view! { <sidebar::OutlineSidebar /> })}

                <div
                    node_ref=workspace_ref
                    class="editor-workspace flex-1 overflow-y-auto bg-[#e9ecef] relative flex justify-center custom-scrollbar"
                    on:scroll=move |_| ctl.on_workspace_scroll()
                >
                    <div class="my-8 flex flex-col items-center gap-10">
                        {move || {
                            let active = state.active_page.get();
                            let count = state.pages.with(|p| p.len());
                            visible_range(active, count, VIRTUALIZATION_RADIUS)
                                .map(|index| view! { <EditorPage index=index /> })
                                .collect_view()
                        }}
                    </div>
                </div>

                <ZoomControls />
            </div>

            <StatusBar />
        </div>
    }
}

/// One mounted page: ruler on top, then the fixed-size page box. The
/// active page hosts the editable surface; its neighbors render inert
/// previews straight from the page list.
#[component]
fn EditorPage(index: usize) -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();
    let ctl = expect_context::<PaginationController>();

    let is_active = move || state.active_page.get() == index;

    let page_style = move || {
        let s = state.settings.get();
        let zoom = state.zoom.get() as f64 / 100.0;
        let shadow = if is_active() {
            "0 10px 25px rgba(0,0,0,0.22)"
        } else {
            "0 8px 18px rgba(0,0,0,0.12)"
        };
        let outline = if is_active() {
            "3px solid rgba(43,87,154,0.30)"
        } else {
            "none"
        };
        format!(
            "width:{}px;height:{}px;background-color:{};\
             padding:{}px {}px {}px {}px;\
             box-shadow:{shadow};outline:{outline};\
             transform:scale({zoom});transform-origin:top center;",
            s.page_width_px(),
            s.page_height_px(),
            s.background,
            cm_to_px(s.margins.top),
            cm_to_px(s.margins.right),
            cm_to_px(s.margins.bottom),
            cm_to_px(s.margins.left),
        )
    };

    let surface_class = move || {
        if state.rtl.get() {
            "editor-content outline-none w-full h-full font-nastaleeq text-right"
        } else {
            "editor-content outline-none w-full h-full text-left"
        }
    };
    let surface_style = move || {
        if state.rtl.get() {
            "font-family:'Jameel Noori Nastaleeq','Noto Nastaliq Urdu',serif;line-height:2.0;"
                .to_string()
        } else {
            format!("font-family:{};line-height:1.6;", state.font_name.get())
        }
    };
    let dir = move || if state.rtl.get() { "rtl" } else { "ltr" };

    view! {
        <div class="flex flex-col items-center">
            <div style=move || format!("width:{}px", state.settings.get().page_width_px())>
                <ruler::Ruler />
            </div>

            <div
                data-page-index=index.to_string()
                class="word-page-container bg-white mx-auto relative transition-all duration-200"
                style=page_style
                on:click=move |_| {
                    if !is_active() {
                        ctl.save_surface();
                        state.active_page.set(index);
                    }
                }
            >
                {move || {
                    if is_active() {
                        view! {
                            <div
                                node_ref=ctl.surface_ref()
                                contenteditable="true"
                                spellcheck="true"
                                dir=dir
                                class=surface_class
                                style=surface_style
                                on:input=move |_| ctl.on_input()
                                on:paste=move |ev: web_sys::ClipboardEvent| ctl.on_paste(ev)
                                on:keyup=move |_| ctl.refresh_formats()
                                on:mouseup=move |_| ctl.refresh_formats()
                            ></div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div
                                dir=dir
                                class="editor-content w-full h-full opacity-90 pointer-events-none"
                                style=surface_style
                                inner_html=move || {
                                    state.pages.with(|p| p.get(index).cloned()).unwrap_or_default()
                                }
                            ></div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ZoomControls() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();

    view! {
        <div class="absolute bottom-6 right-8 flex items-center bg-white rounded shadow-lg border border-gray-200 z-50">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                on:click=move |_| state.zoom_out()
            >
                <ZoomOut />
            </Button>
            <span class="w-12 text-center text-xs font-medium border-l border-r border-gray-200 py-2">
                {move || format!("{}%", state.zoom.get())}
            </span>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                on:click=move |_| state.zoom_in()
            >
                <ZoomIn />
            </Button>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let EditorContext(state) = expect_context::<EditorContext>();

    let saved_label = move || {
        state
            .last_saved_ms
            .get()
            .map(|ms| format!("Saved {}", clock_label(ms)))
            .unwrap_or_default()
    };

    view! {
        <div class="bg-[#f8f9fa] border-t border-[#ced4da] h-6 px-4 flex justify-between items-center text-[11px] text-[#595959] shrink-0 select-none">
            <div class="flex items-center gap-4">
                <button
                    class="flex items-center gap-1 hover:bg-[#e2e6ea] px-1 rounded [&_svg]:size-3"
                    on:click=move |_| state.toggle_sidebar()
                >
                    <PanelLeft />
                    {move || {
                        format!(
                            "Page {} of {}",
                            state.active_page.get() + 1,
                            state.pages.with(|p| p.len()),
                        )
                    }}
                </button>
                <span class="px-1">{move || format!("{} words", state.word_count.get())}</span>
                <span class="px-1">{move || format!("{} characters", state.char_count.get())}</span>
                <span class="px-1">
                    {move || {
                        if state.rtl.get() { "Urdu (Pakistan)" } else { "English (United States)" }
                    }}
                </span>
            </div>
            <span class="px-1 text-gray-400">{saved_label}</span>
        </div>
    }
}
