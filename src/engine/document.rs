use std::fmt;

/// Canonical content of a page with nothing in it. `contenteditable`
/// surfaces need the empty paragraph to keep a caret line.
pub const EMPTY_PAGE: &str = "<p><br/></p>";

/// The paginated document: an ordered list of serialized page fragments
/// plus the index of the page currently being edited.
///
/// Invariants: there is always at least one page, and `active` is always
/// in bounds. Pages are only ever appended; nothing here removes one.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pages: Vec<String>,
    active: usize,
}

/// Error for page writes past the end of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageIndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for PageIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page index {} out of bounds for document of {} pages",
            self.index, self.len
        )
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with a single empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![EMPTY_PAGE.to_string()],
            active: 0,
        }
    }

    /// Restores a saved page sequence. An empty sequence falls back to a
    /// single empty page.
    pub fn from_pages(pages: Vec<String>) -> Self {
        if pages.is_empty() {
            return Self::new();
        }
        Self { pages, active: 0 }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Moves the active pointer, clamped to the last page.
    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(self.pages.len() - 1);
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn active_page(&self) -> &str {
        &self.pages[self.active]
    }

    /// Stores `content` as the active page. Empty content is normalized
    /// to the empty page marker.
    pub fn set_active_page(&mut self, content: impl Into<String>) {
        let active = self.active;
        self.pages[active] = Self::normalize(content.into());
    }

    /// Stores `content` at `index`; `index == page_count()` appends a new
    /// page, anything past that is an error.
    pub fn set_page(&mut self, index: usize, content: impl Into<String>) -> Result<(), PageIndexError> {
        let content = Self::normalize(content.into());
        if index < self.pages.len() {
            self.pages[index] = content;
            Ok(())
        } else if index == self.pages.len() {
            self.pages.push(content);
            Ok(())
        } else {
            Err(PageIndexError {
                index,
                len: self.pages.len(),
            })
        }
    }

    /// Appends an empty page iff `index` is currently the last page.
    /// Returns whether a page was created.
    pub fn ensure_page_after(&mut self, index: usize) -> bool {
        if index + 1 == self.pages.len() {
            self.pages.push(EMPTY_PAGE.to_string());
            true
        } else {
            false
        }
    }

    /// Splices `html` in front of the page at `index`. No-op out of
    /// bounds; migration callers create the page first.
    pub(crate) fn prepend_to_page(&mut self, index: usize, html: &str) {
        if let Some(page) = self.pages.get_mut(index) {
            *page = format!("{html}{page}");
        }
    }

    /// Appends a page holding exactly `content` (migration spill gets no
    /// empty-paragraph filler).
    pub(crate) fn append_page(&mut self, content: String) {
        self.pages.push(Self::normalize(content));
    }

    /// Page-break semantics: move to the next page, creating it when the
    /// active page is the last one. Returns the new active index.
    pub fn advance(&mut self) -> usize {
        self.ensure_page_after(self.active);
        self.active += 1;
        self.active
    }

    /// Moves to the previous page, stopping at the first.
    pub fn retreat(&mut self) -> usize {
        self.active = self.active.saturating_sub(1);
        self.active
    }

    /// Every fragment joined in order. Content conservation checks and
    /// exports compare documents through this.
    pub fn concat_html(&self) -> String {
        self.pages.concat()
    }

    fn normalize(content: String) -> String {
        if content.is_empty() {
            EMPTY_PAGE.to_string()
        } else {
            content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_one_empty_page() {
        let doc = Document::new();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.active(), 0);
        assert_eq!(doc.active_page(), EMPTY_PAGE);
    }

    #[test]
    fn from_pages_keeps_the_sequence() {
        let doc = Document::from_pages(vec!["<p>a</p>".into(), "<p>b</p>".into()]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page(1), Some("<p>b</p>"));
        assert_eq!(doc.page(2), None);
    }

    #[test]
    fn from_empty_sequence_falls_back_to_empty_page() {
        let doc = Document::from_pages(Vec::new());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.active_page(), EMPTY_PAGE);
    }

    #[test]
    fn set_page_replaces_or_appends() {
        let mut doc = Document::new();
        doc.set_page(0, "<p>x</p>").unwrap();
        assert_eq!(doc.page(0), Some("<p>x</p>"));

        doc.set_page(1, "<p>y</p>").unwrap();
        assert_eq!(doc.page_count(), 2);

        let err = doc.set_page(5, "<p>z</p>").unwrap_err();
        assert_eq!(err, PageIndexError { index: 5, len: 2 });
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn empty_content_normalizes_to_marker() {
        let mut doc = Document::new();
        doc.set_active_page("");
        assert_eq!(doc.active_page(), EMPTY_PAGE);
    }

    #[test]
    fn set_active_clamps() {
        let mut doc = Document::from_pages(vec!["a".into(), "b".into()]);
        doc.set_active(99);
        assert_eq!(doc.active(), 1);
    }

    #[test]
    fn ensure_page_after_only_extends_the_tail() {
        let mut doc = Document::from_pages(vec!["a".into(), "b".into()]);
        assert!(!doc.ensure_page_after(0));
        assert_eq!(doc.page_count(), 2);
        assert!(doc.ensure_page_after(1));
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.page(2), Some(EMPTY_PAGE));
    }

    #[test]
    fn advance_creates_a_page_at_the_end() {
        let mut doc = Document::new();
        assert_eq!(doc.advance(), 1);
        assert_eq!(doc.page_count(), 2);

        doc.retreat();
        assert_eq!(doc.advance(), 1);
        assert_eq!(doc.page_count(), 2, "no duplicate page when one exists");
    }

    #[test]
    fn retreat_stops_at_the_first_page() {
        let mut doc = Document::new();
        assert_eq!(doc.retreat(), 0);
    }

    #[test]
    fn prepend_splices_in_front() {
        let mut doc = Document::from_pages(vec!["<p>a</p>".into(), "<p>b</p>".into()]);
        doc.prepend_to_page(1, "<p>moved</p>");
        assert_eq!(doc.page(1), Some("<p>moved</p><p>b</p>"));

        doc.prepend_to_page(7, "<p>lost</p>");
        assert_eq!(doc.concat_html(), "<p>a</p><p>moved</p><p>b</p>");
    }
}
