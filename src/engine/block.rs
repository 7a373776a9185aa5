use crate::engine::stats::html_to_text;

/// Elements that never take children and never close.
const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One top-level unit of a page fragment: an element with its subtree, a
/// comment, or a bare text run. Blocks are what the pagination engine
/// measures and migrates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub html: String,
}

impl Block {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Lowercase tag name when the block is an element.
    pub fn tag(&self) -> Option<String> {
        let rest = self.html.strip_prefix('<')?;
        let name: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() {
            None
        } else {
            Some(name.to_ascii_lowercase())
        }
    }

    /// Outline level for heading blocks: h1 is 0, h2 is 1, h3 is 2.
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag()?.as_str() {
            "h1" => Some(0),
            "h2" => Some(1),
            "h3" => Some(2),
            _ => None,
        }
    }
}

/// Splits a serialized fragment into top-level blocks.
///
/// The scanner tracks element nesting and quoted attribute values; void
/// and self-closed elements add no depth. Markup it cannot make sense of
/// (an unterminated tag, an unclosed element) lands in one final block,
/// so joining the blocks always reproduces the input byte for byte.
pub fn split_blocks(fragment: &str) -> Vec<Block> {
    let bytes = fragment.as_bytes();
    let len = bytes.len();
    let mut blocks: Vec<Block> = Vec::new();
    let mut unit_start = 0usize;
    let mut depth = 0usize;
    let mut i = 0usize;

    while i < len {
        if bytes[i] != b'<' || !looks_like_tag(bytes, i) {
            i += 1;
            continue;
        }

        // A tag at top level ends any pending text run.
        if depth == 0 && i > unit_start {
            blocks.push(Block::new(&fragment[unit_start..i]));
            unit_start = i;
        }

        if fragment[i..].starts_with("<!--") {
            let Some(found) = fragment[i + 4..].find("-->") else {
                break;
            };
            let end = i + 4 + found + 3;
            if depth == 0 {
                blocks.push(Block::new(&fragment[unit_start..end]));
                unit_start = end;
            }
            i = end;
            continue;
        }

        let Some(tag_end) = find_tag_end(bytes, i) else {
            break;
        };

        if bytes[i + 1] == b'/' {
            if depth > 0 {
                depth -= 1;
                if depth == 0 {
                    blocks.push(Block::new(&fragment[unit_start..=tag_end]));
                    unit_start = tag_end + 1;
                }
            } else {
                // Stray closing tag: keep it as its own unit.
                blocks.push(Block::new(&fragment[unit_start..=tag_end]));
                unit_start = tag_end + 1;
            }
            i = tag_end + 1;
            continue;
        }

        let name = tag_name(&fragment[i + 1..tag_end]);
        let self_closing = bytes[tag_end - 1] == b'/';
        if self_closing || VOID_TAGS.contains(&name.as_str()) {
            if depth == 0 {
                blocks.push(Block::new(&fragment[unit_start..=tag_end]));
                unit_start = tag_end + 1;
            }
        } else {
            depth += 1;
        }
        i = tag_end + 1;
    }

    // Tail: pending text, an unterminated tag, or an unclosed element.
    if unit_start < len {
        blocks.push(Block::new(&fragment[unit_start..]));
    }

    blocks
}

/// Rebuilds a fragment from blocks. Inverse of [`split_blocks`].
pub fn join_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(|b| b.html.as_str()).collect()
}

/// Byte index of the `>` closing the tag that starts at `start`, skipping
/// quoted attribute values.
pub(crate) fn find_tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut j = start + 1;
    while j < bytes.len() {
        let b = bytes[j];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(j),
                _ => {}
            },
        }
        j += 1;
    }
    None
}

fn looks_like_tag(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i + 1) {
        Some(b) => b.is_ascii_alphabetic() || *b == b'/' || *b == b'!',
        None => false,
    }
}

fn tag_name(tag_inner: &str) -> String {
    tag_inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Sidebar outline entry. `id` matches the DOM id stamped on rendered
/// headings, `heading-{page}-{ordinal}` with the ordinal counted within
/// the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
    pub page: usize,
    pub block: usize,
}

/// Collects h1/h2/h3 blocks across the whole document, in page order.
pub fn scan_headings(pages: &[String]) -> Vec<HeadingEntry> {
    let mut out = Vec::new();
    for (page, html) in pages.iter().enumerate() {
        let mut ordinal = 0usize;
        for (block, unit) in split_blocks(html).iter().enumerate() {
            let Some(level) = unit.heading_level() else {
                continue;
            };
            out.push(HeadingEntry {
                id: format!("heading-{page}-{ordinal}"),
                text: html_to_text(&unit.html).trim().to_string(),
                level,
                page,
                block,
            });
            ordinal += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn htmls(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.html.as_str()).collect()
    }

    #[test]
    fn splits_sibling_paragraphs() {
        let blocks = split_blocks("<p>one</p><p>two</p>");
        assert_eq!(htmls(&blocks), vec!["<p>one</p>", "<p>two</p>"]);
    }

    #[test]
    fn nested_elements_stay_in_one_block() {
        let blocks = split_blocks("<div><p>a</p><ul><li>b</li></ul></div><p>c</p>");
        assert_eq!(
            htmls(&blocks),
            vec!["<div><p>a</p><ul><li>b</li></ul></div>", "<p>c</p>"]
        );
    }

    #[test]
    fn text_runs_become_blocks() {
        let blocks = split_blocks("hello <b>world</b> bye");
        assert_eq!(htmls(&blocks), vec!["hello ", "<b>world</b>", " bye"]);
    }

    #[test]
    fn void_and_self_closed_elements_need_no_closer() {
        let blocks = split_blocks("<p>a<br>b</p><hr><img src=\"x.png\"/>");
        assert_eq!(
            htmls(&blocks),
            vec!["<p>a<br>b</p>", "<hr>", "<img src=\"x.png\"/>"]
        );
    }

    #[test]
    fn quoted_attributes_may_contain_angle_brackets() {
        let html = "<p title=\"a > b\">x</p><p title='<'>y</p>";
        let blocks = split_blocks(html);
        assert_eq!(
            htmls(&blocks),
            vec!["<p title=\"a > b\">x</p>", "<p title='<'>y</p>"]
        );
    }

    #[test]
    fn literal_angle_bracket_is_text() {
        let blocks = split_blocks("a < b<p>c</p>");
        assert_eq!(htmls(&blocks), vec!["a < b", "<p>c</p>"]);
    }

    #[test]
    fn comments_are_standalone_units() {
        let blocks = split_blocks("<!-- note --><p>x</p>");
        assert_eq!(htmls(&blocks), vec!["<!-- note -->", "<p>x</p>"]);
    }

    #[test]
    fn stray_closing_tag_is_kept() {
        let blocks = split_blocks("</p><p>x</p>");
        assert_eq!(htmls(&blocks), vec!["</p>", "<p>x</p>"]);
    }

    #[test]
    fn malformed_markup_degrades_to_a_tail_block() {
        // Unclosed element: everything from its start is one unit.
        let blocks = split_blocks("<p>a</p><div><p>b</p>");
        assert_eq!(htmls(&blocks), vec!["<p>a</p>", "<div><p>b</p>"]);

        // Unterminated tag.
        let blocks = split_blocks("x<p");
        assert_eq!(htmls(&blocks), vec!["x", "<p"]);
    }

    #[test]
    fn empty_fragment_has_no_blocks() {
        assert!(split_blocks("").is_empty());
    }

    #[test]
    fn join_is_the_inverse_of_split() {
        let samples = [
            "<p><br/></p>",
            "<h1>عنوان</h1><p>متن</p>",
            "plain text only",
            "<p>a</p>\n<p>b</p>",
            "<ul><li>x<br></li></ul><!--c--><p title=\"(>)\">q</p>trail",
            "<div><span>unclosed",
        ];
        for s in samples {
            assert_eq!(join_blocks(&split_blocks(s)), s, "sample: {s}");
        }
    }

    #[test]
    fn block_tag_and_heading_level() {
        assert_eq!(Block::new("<H2 id=\"x\">t</H2>").tag().as_deref(), Some("h2"));
        assert_eq!(Block::new("plain").tag(), None);
        assert_eq!(Block::new("</p>").tag(), None);
        assert_eq!(Block::new("<h1>t</h1>").heading_level(), Some(0));
        assert_eq!(Block::new("<h3>t</h3>").heading_level(), Some(2));
        assert_eq!(Block::new("<h4>t</h4>").heading_level(), None);
        assert_eq!(Block::new("<p>t</p>").heading_level(), None);
    }

    #[test]
    fn heading_scan_walks_every_page() {
        let pages = vec![
            "<h1>First</h1><p>body</p><h2>Sub</h2>".to_string(),
            "<p>no headings</p>".to_string(),
            "<h3> Deep </h3>".to_string(),
        ];
        let found = scan_headings(&pages);
        assert_eq!(found.len(), 3);

        assert_eq!(found[0].id, "heading-0-0");
        assert_eq!(found[0].level, 0);
        assert_eq!(found[0].text, "First");
        assert_eq!(found[0].page, 0);
        assert_eq!(found[0].block, 0);

        assert_eq!(found[1].id, "heading-0-1");
        assert_eq!(found[1].level, 1);
        assert_eq!(found[1].block, 2);

        assert_eq!(found[2].id, "heading-2-0");
        assert_eq!(found[2].level, 2);
        assert_eq!(found[2].text, "Deep");
        assert_eq!(found[2].page, 2);
    }
}
