//! Inline span tokenizer for a single line of text.

use regex::Regex;
use std::sync::OnceLock;

/// A styled fragment of a single line of text.
///
/// Concatenating the visible text of all runs reconstructs the line with the
/// formatting markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineRun {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
}

impl InlineRun {
    /// The visible text of this run (markers stripped, link shown as its
    /// display text).
    pub fn text(&self) -> &str {
        match self {
            InlineRun::Plain(s)
            | InlineRun::Bold(s)
            | InlineRun::Italic(s)
            | InlineRun::Code(s) => s,
            InlineRun::Link { text, .. } => text,
        }
    }
}

/// A candidate span match before overlap resolution.
struct Span {
    start: usize,
    end: usize,
    run: InlineRun,
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap())
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap())
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap())
}

/// Tokenizes one line of text into an ordered sequence of inline runs.
///
/// Four pattern families are scanned independently: `[text](url)` links,
/// `**bold**`/`__bold__`, single-marker `*italic*`/`_italic_`, and
/// `` `code` ``. All candidate spans are stable-sorted by start offset and
/// accepted greedily in that order, discarding any span that overlaps an
/// already-accepted one. Ties at the same offset therefore resolve by family
/// registration order: link, bold, italic, code.
///
/// Link display text is not re-parsed: `[**x**](u)` yields a single Link run
/// whose text keeps the literal asterisks.
///
/// Malformed markers never fail; they simply stay in the plain text. An
/// empty line yields a single empty Plain run.
pub fn parse_inline(line: &str) -> Vec<InlineRun> {
    let mut spans: Vec<Span> = Vec::new();

    for caps in link_re().captures_iter(line) {
        let whole = caps.get(0).unwrap();
        spans.push(Span {
            start: whole.start(),
            end: whole.end(),
            run: InlineRun::Link {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            },
        });
    }

    for caps in bold_re().captures_iter(line) {
        let whole = caps.get(0).unwrap();
        let inner = caps.get(1).or_else(|| caps.get(2)).unwrap();
        spans.push(Span {
            start: whole.start(),
            end: whole.end(),
            run: InlineRun::Bold(inner.as_str().to_string()),
        });
    }

    for (start, end, text) in single_marker_spans(line, b'*') {
        spans.push(Span { start, end, run: InlineRun::Italic(text) });
    }
    for (start, end, text) in single_marker_spans(line, b'_') {
        spans.push(Span { start, end, run: InlineRun::Italic(text) });
    }

    for caps in code_re().captures_iter(line) {
        let whole = caps.get(0).unwrap();
        spans.push(Span {
            start: whole.start(),
            end: whole.end(),
            run: InlineRun::Code(caps[1].to_string()),
        });
    }

    // Stable sort keeps family registration order for equal offsets.
    spans.sort_by_key(|s| s.start);

    let mut accepted: Vec<Span> = Vec::new();
    for span in spans {
        let overlaps = accepted
            .iter()
            .any(|a| span.start < a.end && a.start < span.end);
        if !overlaps {
            accepted.push(span);
        }
    }

    let mut runs = Vec::new();
    let mut cursor = 0;
    for span in accepted {
        if span.start > cursor {
            runs.push(InlineRun::Plain(line[cursor..span.start].to_string()));
        }
        cursor = span.end;
        runs.push(span.run);
    }
    if cursor < line.len() || runs.is_empty() {
        runs.push(InlineRun::Plain(line[cursor..].to_string()));
    }
    runs
}

/// Finds `*text*`-style spans where both markers are single (not part of a
/// longer run of the same character).
///
/// The `regex` crate has no lookaround, and the classification is simple
/// enough to state directly: an opener is a marker byte not adjacent to
/// another, the closer is the next marker byte, and the span is only taken
/// when the closer is also single and the content is non-empty.
fn single_marker_spans(line: &str, marker: u8) -> Vec<(usize, usize, String)> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let single_opener = bytes[i] == marker
            && (i == 0 || bytes[i - 1] != marker)
            && (i + 1 < bytes.len() && bytes[i + 1] != marker);
        if single_opener {
            if let Some(offset) = bytes[i + 1..].iter().position(|&b| b == marker) {
                let j = i + 1 + offset;
                let single_closer = j + 1 >= bytes.len() || bytes[j + 1] != marker;
                if single_closer && j > i + 1 {
                    spans.push((i, j + 1, line[i + 1..j].to_string()));
                    i = j + 1;
                    continue;
                }
            }
        }
        i += 1;
    }
    spans
}
