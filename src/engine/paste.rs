/// Lines inserted per animation frame while draining a paste.
pub const PASTE_CHUNK_LINES: usize = 80;

/// Converts pasted plain text into the editor's fragment form. Escapes
/// `&`, `<`, `>` first; a run of two or more newlines becomes a paragraph
/// break, a lone newline a line break, and the whole result is wrapped in
/// one paragraph.
pub fn text_to_html(text: &str) -> String {
    let escaped = escape_text(text);
    let mut out = String::with_capacity(escaped.len() + 16);
    out.push_str("<p>");

    let mut newlines = 0usize;
    for ch in escaped.chars() {
        if ch == '\n' {
            newlines += 1;
            continue;
        }
        flush_newlines(&mut out, newlines);
        newlines = 0;
        out.push(ch);
    }
    flush_newlines(&mut out, newlines);

    out.push_str("</p>");
    out
}

fn flush_newlines(out: &mut String, count: usize) {
    if count >= 2 {
        out.push_str("</p><p>");
    } else if count == 1 {
        out.push_str("<br/>");
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Splits pasted text into fixed-size line batches so huge pastes are
/// inserted over several animation frames instead of blocking the UI.
#[derive(Clone, Debug)]
pub struct PasteChunker {
    lines: Vec<String>,
    batch: usize,
    cursor: usize,
}

impl PasteChunker {
    /// Empty text yields a chunker that is already done.
    pub fn new(text: &str, batch: usize) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_owned).collect()
        };
        Self {
            lines,
            batch: batch.max(1),
            cursor: 0,
        }
    }

    /// Total number of batches this paste drains in.
    pub fn chunk_count(&self) -> usize {
        self.lines.len().div_ceil(self.batch)
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// The next batch as an insertable fragment, or `None` once drained.
    pub fn next_chunk_html(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        let end = (self.cursor + self.batch).min(self.lines.len());
        let joined = self.lines[self.cursor..end].join("\n");
        self.cursor = end;
        Some(text_to_html(&joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(text_to_html("a & b < c > d"), "<p>a &amp; b &lt; c &gt; d</p>");
        // Ampersand first, so entities are not double-escaped.
        assert_eq!(text_to_html("&lt;"), "<p>&amp;lt;</p>");
    }

    #[test]
    fn single_newline_becomes_line_break() {
        assert_eq!(text_to_html("one\ntwo"), "<p>one<br/>two</p>");
    }

    #[test]
    fn blank_line_runs_become_paragraph_breaks() {
        assert_eq!(text_to_html("one\n\ntwo"), "<p>one</p><p>two</p>");
        assert_eq!(text_to_html("one\n\n\n\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn leading_and_trailing_newlines_keep_their_breaks() {
        assert_eq!(text_to_html("\n\nx"), "<p></p><p>x</p>");
        assert_eq!(text_to_html("x\n"), "<p>x<br/></p>");
        assert_eq!(text_to_html("x\n\n"), "<p>x</p><p></p>");
    }

    #[test]
    fn chunk_count_is_lines_over_batch_rounded_up() {
        let text_of = |n: usize| vec!["line"; n].join("\n");

        assert_eq!(PasteChunker::new(&text_of(80), 80).chunk_count(), 1);
        assert_eq!(PasteChunker::new(&text_of(81), 80).chunk_count(), 2);
        assert_eq!(PasteChunker::new(&text_of(400), 80).chunk_count(), 5);
        assert_eq!(PasteChunker::new(&text_of(401), 80).chunk_count(), 6);
        assert_eq!(PasteChunker::new("one line", 80).chunk_count(), 1);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        let mut chunker = PasteChunker::new("", 80);
        assert!(chunker.is_done());
        assert_eq!(chunker.chunk_count(), 0);
        assert_eq!(chunker.next_chunk_html(), None);
    }

    #[test]
    fn drains_in_order_and_then_stops() {
        let text = (1..=5).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut chunker = PasteChunker::new(&text, 2);
        assert_eq!(chunker.chunk_count(), 3);

        assert_eq!(chunker.next_chunk_html().unwrap(), "<p>1<br/>2</p>");
        assert_eq!(chunker.next_chunk_html().unwrap(), "<p>3<br/>4</p>");
        assert!(!chunker.is_done());
        assert_eq!(chunker.next_chunk_html().unwrap(), "<p>5</p>");
        assert!(chunker.is_done());
        assert_eq!(chunker.next_chunk_html(), None);
    }

    #[test]
    fn batch_size_has_a_floor_of_one() {
        let mut chunker = PasteChunker::new("a\nb", 0);
        assert_eq!(chunker.chunk_count(), 2);
        assert_eq!(chunker.next_chunk_html().unwrap(), "<p>a</p>");
    }
}
