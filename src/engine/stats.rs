use crate::engine::block::find_tag_end;

/// Closing one of these emits a line break in the extracted text.
const BLOCK_CLOSES: [&str; 13] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "tr", "blockquote",
];

/// Plain text of an HTML fragment: tags dropped, `<br>` and block-element
/// closes turned into newlines, common entities decoded. Unknown entities
/// pass through untouched.
pub fn html_to_text(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut i = 0usize;

    while i < html.len() {
        match bytes[i] {
            b'<' => {
                if html[i..].starts_with("<!--") {
                    let Some(found) = html[i + 4..].find("-->") else {
                        break;
                    };
                    i += 4 + found + 3;
                    continue;
                }
                let Some(end) = find_tag_end(bytes, i) else {
                    break;
                };
                let inner = &html[i + 1..end];
                let closing = inner.starts_with('/');
                let name: String = inner
                    .trim_start_matches('/')
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase();
                if name == "br" || (closing && BLOCK_CLOSES.contains(&name.as_str())) {
                    out.push('\n');
                }
                i = end + 1;
            }
            b'&' => match decode_entity(&html[i..]) {
                Some((ch, consumed)) => {
                    out.push(ch);
                    i += consumed;
                }
                None => {
                    out.push('&');
                    i += 1;
                }
            },
            _ => match html[i..].chars().next() {
                Some(ch) => {
                    out.push(ch);
                    i += ch.len_utf8();
                }
                None => break,
            },
        }
    }

    out
}

fn decode_entity(s: &str) -> Option<(char, usize)> {
    const TABLE: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&nbsp;", '\u{a0}'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];
    TABLE
        .iter()
        .find(|(entity, _)| s.starts_with(entity))
        .map(|&(entity, ch)| (ch, entity.len()))
}

/// Whitespace-separated word count; blank text counts zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Characters as UTF-16 code units, matching what browsers report for
/// text length.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocStats {
    pub words: usize,
    pub chars: usize,
}

/// Word and character totals across the whole document.
pub fn doc_stats(pages: &[String]) -> DocStats {
    let text = pages
        .iter()
        .map(|page| html_to_text(page))
        .collect::<Vec<_>>()
        .join("\n");
    DocStats {
        words: word_count(text.trim()),
        chars: char_count(&text),
    }
}
