//! Browser glue for the editing surface: `execCommand` plumbing, caret
//! placement, the hidden measurer backing the engine's height probe, and
//! the scroll-tracking geometry reads.

use crate::engine::{join_blocks, Block, HeightProbe};
use wasm_bindgen::JsCast;

/// Heading flash color used by sidebar navigation.
const HIGHLIGHT_COLOR: &str = "#fffec8";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    document()?.dyn_into().ok()
}

pub(crate) fn exec_command(command: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.exec_command(command);
    }
}

pub(crate) fn exec_command_with_value(command: &str, value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.exec_command_with_show_ui_and_value(command, false, value);
    }
}

pub(crate) fn insert_html_at_caret(html: &str) {
    exec_command_with_value("insertHTML", html);
}

pub(crate) fn query_command_state(command: &str) -> bool {
    html_document()
        .and_then(|doc| doc.query_command_state(command).ok())
        .unwrap_or(false)
}

/// Current value of a stateful command (fontName, fontSize). Quotes the
/// browser wraps around font names are stripped.
pub(crate) fn query_command_value(command: &str) -> Option<String> {
    let value = html_document()?.query_command_value(command).ok()?;
    let value = value.trim_matches(|c| c == '"' || c == '\'').to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Plain text from a paste event. Empty or unreadable clipboard data
/// yields `None`; the paste handler treats that as a no-op.
pub(crate) fn clipboard_text(ev: &web_sys::ClipboardEvent) -> Option<String> {
    let text = ev.clipboard_data()?.get_data("text/plain").ok()?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub(crate) fn prompt(message: &str) -> Option<String> {
    let input = web_sys::window()?
        .prompt_with_message(message)
        .ok()
        .flatten()?;
    let input = input.trim().to_string();
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(f)
                .as_ref()
                .unchecked_ref(),
            ms,
        );
    }
}

/// Collapses the selection to the end of `el` and focuses it. Used after
/// a migration pass rewrites the surface, which is the typing-at-the-
/// bottom case.
pub(crate) fn caret_to_end(el: &web_sys::HtmlElement) {
    let _ = el.focus();
    let Some(win) = web_sys::window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };
    let Ok(range) = doc.create_range() else {
        return;
    };
    if range.select_node_contents(el).is_err() {
        return;
    }
    range.collapse_with_to_start(false);
    if let Ok(Some(selection)) = win.get_selection() {
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

/// Viewport center plus each rendered page's center, both in client
/// coordinates, for [`crate::engine::nearest_page`].
pub(crate) fn page_centers(workspace: &web_sys::HtmlElement) -> (f64, Vec<(usize, f64)>) {
    let rect = workspace.get_bounding_client_rect();
    let viewport_center = rect.top() + rect.height() / 2.0;

    let mut centers = Vec::new();
    if let Ok(nodes) = workspace.query_selector_all("[data-page-index]") {
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let Some(index) = el
                .get_attribute("data-page-index")
                .and_then(|v| v.parse::<usize>().ok())
            else {
                continue;
            };
            let r = el.get_bounding_client_rect();
            centers.push((index, r.top() + r.height() / 2.0));
        }
    }
    (viewport_center, centers)
}

/// Stamps `heading-{page}-{ordinal}` ids onto the rendered h1/h2/h3
/// elements so sidebar entries can address them.
pub(crate) fn stamp_heading_ids(workspace: &web_sys::HtmlElement) {
    let Ok(pages) = workspace.query_selector_all("[data-page-index]") else {
        return;
    };
    for i in 0..pages.length() {
        let Some(page_el) = pages.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(page) = page_el
            .get_attribute("data-page-index")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            continue;
        };
        let Ok(headings) = page_el.query_selector_all("h1, h2, h3") else {
            continue;
        };
        for ordinal in 0..headings.length() {
            if let Some(el) = headings
                .item(ordinal)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            {
                el.set_id(&format!("heading-{page}-{ordinal}"));
            }
        }
    }
}

/// Scrolls a stamped heading into the middle of the view and flashes its
/// background for a second.
pub(crate) fn flash_heading(id: &str) {
    let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);

    let original = el
        .style()
        .get_property_value("background-color")
        .unwrap_or_default();
    let _ = el.style().set_property("background-color", HIGHLIGHT_COLOR);
    set_timeout(1000, move || {
        let _ = el.style().set_property("background-color", &original);
    });
}

/// Hidden sibling of the editable surface used to measure how tall a set
/// of blocks renders. Mirrors the surface's classes, inline styles and
/// direction so line wrapping matches, but is pinned off-screen with an
/// unconstrained height. Removed from the DOM on drop.
pub(crate) struct SurfaceMeasurer {
    host: web_sys::HtmlElement,
}

impl SurfaceMeasurer {
    pub fn for_surface(surface: &web_sys::HtmlElement, content_width_px: f64) -> Option<Self> {
        let doc = document()?;
        let host: web_sys::HtmlElement = doc.create_element("div").ok()?.dyn_into().ok()?;

        host.set_class_name(&surface.class_name());
        if let Some(style) = surface.get_attribute("style") {
            let _ = host.set_attribute("style", &style);
        }
        if let Some(dir) = surface.get_attribute("dir") {
            let _ = host.set_attribute("dir", &dir);
        }

        let style = host.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", "-10000px");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("height", "auto");
        let _ = style.set_property("width", &format!("{content_width_px}px"));

        doc.body()?.append_child(&host).ok()?;
        Some(Self { host })
    }
}

impl HeightProbe for SurfaceMeasurer {
    fn measure(&self, blocks: &[Block]) -> f64 {
        self.host.set_inner_html(&join_blocks(blocks));
        self.host.scroll_height() as f64
    }
}

impl Drop for SurfaceMeasurer {
    fn drop(&mut self) {
        self.host.remove();
    }
}
