//! Document export: pure builders for the HTML/TXT payloads plus the
//! browser glue that hands them to the user.

use crate::engine::stats::html_to_text;
use wasm_bindgen::JsValue;

/// One standalone HTML document; every page keeps a print page break.
pub fn pages_to_html(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| format!("<div style=\"page-break-after:always\">{page}</div>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text with a blank line between pages.
pub fn pages_to_text(pages: &[String]) -> String {
    html_to_text(&pages.join("<br/><br/>"))
}

/// Hands `contents` to the browser as a file download. Failures are
/// dropped; there is no surface to report them on.
pub(crate) fn download(filename: &str, mime: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(mime);
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(el) = document.create_element("a") {
        use wasm_bindgen::JsCast;
        let anchor: web_sys::HtmlAnchorElement = el.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

pub(crate) fn download_html(pages: &[String]) {
    download("document.html", "text/html", &pages_to_html(pages));
}

pub(crate) fn download_txt(pages: &[String]) {
    download("document.txt", "text/plain", &pages_to_text(pages));
}

pub(crate) fn print_document() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_export_wraps_each_page_with_a_page_break() {
        let pages = vec!["<p>a</p>".to_string(), "<p>b</p>".to_string()];
        assert_eq!(
            pages_to_html(&pages),
            "<div style=\"page-break-after:always\"><p>a</p></div>\n\
             <div style=\"page-break-after:always\"><p>b</p></div>"
        );
    }

    #[test]
    fn text_export_separates_pages_with_a_blank_line() {
        let pages = vec!["<p>one</p>".to_string(), "<p>two</p>".to_string()];
        assert_eq!(pages_to_text(&pages), "one\n\n\ntwo\n");
    }

    #[test]
    fn text_export_decodes_entities() {
        let pages = vec!["<p>a &amp; b</p>".to_string()];
        assert_eq!(pages_to_text(&pages), "a & b\n");
    }
}
