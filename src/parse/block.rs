//! Line-oriented block parser for note bodies.

use crate::parse::inline::{InlineRun, parse_inline};
use regex::Regex;
use std::sync::OnceLock;

/// A structural unit of a note body.
///
/// Blocks are ephemeral: produced fresh per export call and discarded after
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `# ` through `#### ` heading, levels 1-4.
    Heading { level: u8, runs: Vec<InlineRun> },
    Paragraph(Vec<InlineRun>),
    /// `> ` prefixed line.
    Blockquote(Vec<InlineRun>),
    /// A contiguous run of list items of one kind.
    List { kind: ListKind, items: Vec<ListItem> },
    /// Raw lines between bare ``` fences; never inline-parsed.
    CodeBlock(Vec<String>),
    HorizontalRule,
    Blank,
}

/// The kind of a list run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
    Checklist,
}

/// One item of a list block.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Check state for checklist items; `None` for bullet/ordered items.
    pub checked: Option<bool>,
    pub runs: Vec<InlineRun>,
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,4}) (.*)$").unwrap())
}

fn checklist_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^- \[( |x|X)\]\s+(.*)$").unwrap())
}

fn ordered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap())
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*+]\s+(.*)$").unwrap())
}

fn rule_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").unwrap())
}

/// Parses a full note body into an ordered sequence of blocks.
///
/// Classification happens one source line at a time, in a fixed order: code
/// fence toggle, in-fence buffering, heading, blockquote, checklist item,
/// ordered item, bullet item, horizontal rule, blank, paragraph fallback.
/// Every line matches at least the fallback, so parsing never fails.
///
/// Consecutive list items of one kind are grouped into a single
/// [`Block::List`]; a kind change flushes the pending group and starts a new
/// one. Ordered items keep no source numbers — renderers number each
/// contiguous run 1..N.
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let mut parser = BlockParser::default();
    for line in body.lines() {
        parser.push_line(line);
    }
    parser.finish()
}

#[derive(Default)]
struct BlockParser {
    blocks: Vec<Block>,
    in_code: bool,
    code_lines: Vec<String>,
    list_kind: Option<ListKind>,
    list_items: Vec<ListItem>,
}

impl BlockParser {
    fn push_line(&mut self, line: &str) {
        if line.trim() == "```" {
            if self.in_code {
                self.in_code = false;
                self.blocks.push(Block::CodeBlock(std::mem::take(&mut self.code_lines)));
            } else {
                self.flush_list();
                self.in_code = true;
            }
            return;
        }

        if self.in_code {
            self.code_lines.push(line.to_string());
            return;
        }

        if let Some(caps) = heading_re().captures(line) {
            self.flush_list();
            let level = caps[1].len() as u8;
            self.blocks.push(Block::Heading { level, runs: parse_inline(&caps[2]) });
            return;
        }

        if let Some(rest) = line.strip_prefix("> ") {
            self.flush_list();
            self.blocks.push(Block::Blockquote(parse_inline(rest)));
            return;
        }

        if let Some(caps) = checklist_re().captures(line) {
            let checked = !caps[1].trim().is_empty();
            self.push_item(ListKind::Checklist, Some(checked), &caps[2]);
            return;
        }

        if let Some(caps) = ordered_re().captures(line) {
            self.push_item(ListKind::Ordered, None, &caps[1]);
            return;
        }

        if let Some(caps) = bullet_re().captures(line) {
            self.push_item(ListKind::Bullet, None, &caps[1]);
            return;
        }

        if rule_re().is_match(line.trim()) {
            self.flush_list();
            self.blocks.push(Block::HorizontalRule);
            return;
        }

        if line.trim().is_empty() {
            self.flush_list();
            self.blocks.push(Block::Blank);
            return;
        }

        self.flush_list();
        self.blocks.push(Block::Paragraph(parse_inline(line)));
    }

    fn push_item(&mut self, kind: ListKind, checked: Option<bool>, text: &str) {
        if self.list_kind != Some(kind) {
            self.flush_list();
            self.list_kind = Some(kind);
        }
        self.list_items.push(ListItem { checked, runs: parse_inline(text) });
    }

    fn flush_list(&mut self) {
        if let Some(kind) = self.list_kind.take() {
            self.blocks.push(Block::List {
                kind,
                items: std::mem::take(&mut self.list_items),
            });
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        if self.in_code {
            // Unterminated fence: flush what was buffered rather than lose it.
            self.blocks.push(Block::CodeBlock(self.code_lines));
        }
        self.blocks
    }
}
