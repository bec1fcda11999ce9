//! Flat paragraph/run document model and the note-to-model mapping.

use crate::export::docx::ResolvedNote;
use crate::export::format_timestamp;
use crate::parse::{Block, InlineRun, ListKind, parse_blocks};

/// Left indent for list items and blockquotes, in twips (0.5 inch).
const LIST_INDENT: u32 = 720;

/// Shading fill for code blocks.
pub(crate) const CODE_FILL: &str = "F2F2F2";

/// Monospace font for code runs.
pub(crate) const MONO_FONT: &str = "Consolas";

/// The assembled document: styled paragraphs plus the hyperlink targets
/// that need external relationships.
pub(crate) struct DocModel {
    pub label: String,
    pub paragraphs: Vec<Para>,
    pub hyperlinks: Vec<String>,
}

/// Paragraph-level border variants used by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ParaBorder {
    #[default]
    None,
    /// Blockquote: thick left border.
    Left,
    /// Horizontal rule: bottom border only.
    Bottom,
    /// Code block: thin border on all four sides.
    Box,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Para {
    pub style: Option<&'static str>,
    pub indent: Option<u32>,
    pub border: ParaBorder,
    pub shaded: bool,
    pub page_break_before: bool,
    pub runs: Vec<Run>,
}

impl Para {
    fn styled(style: &'static str) -> Self {
        Self { style: Some(style), ..Default::default() }
    }

    fn with_runs(runs: Vec<Run>) -> Self {
        Self { runs, ..Default::default() }
    }

    fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Run {
    Text {
        text: String,
        bold: bool,
        italic: bool,
        code: bool,
    },
    Hyperlink {
        text: String,
        /// Index into `DocModel::hyperlinks`.
        index: usize,
    },
}

impl Run {
    fn plain(text: impl Into<String>) -> Self {
        Run::Text { text: text.into(), bold: false, italic: false, code: false }
    }

    fn bold(text: impl Into<String>) -> Self {
        Run::Text { text: text.into(), bold: true, italic: false, code: false }
    }
}

/// Builds the document model for a batch of resolved notes.
///
/// Each note renders as: title, pipe-joined metadata summary, timestamp
/// line, optional links sub-heading with bulleted hyperlinks, a rule, then
/// the parsed body. Every note after the first forces a page break.
pub(crate) fn build_model(notes: &[ResolvedNote<'_>], label: &str) -> DocModel {
    let mut model = DocModel {
        label: label.to_string(),
        paragraphs: Vec::new(),
        hyperlinks: Vec::new(),
    };

    for (i, resolved) in notes.iter().enumerate() {
        push_note(&mut model, resolved, i > 0);
    }

    model
}

fn push_note(model: &mut DocModel, resolved: &ResolvedNote<'_>, page_break: bool) {
    let note = resolved.note;

    let mut title = Para::styled("Title");
    title.page_break_before = page_break;
    title.runs.push(Run::plain(note.title()));
    model.paragraphs.push(title);

    model
        .paragraphs
        .push(Para::with_runs(vec![Run::plain(metadata_summary(resolved))]));
    model.paragraphs.push(Para::with_runs(vec![Run::plain(format!(
        "作成日時: {} | 更新日時: {}",
        format_timestamp(note.created()),
        format_timestamp(note.updated())
    ))]));

    if !note.urls().is_empty() {
        let mut heading = Para::styled("Heading4");
        heading.runs.push(Run::plain("参考URL"));
        model.paragraphs.push(heading);

        for entry in note.urls() {
            let text = entry.title.clone().unwrap_or_else(|| entry.url.clone());
            model.hyperlinks.push(entry.url.clone());
            let index = model.hyperlinks.len() - 1;
            let mut para = Para::with_runs(vec![
                Run::plain("• "),
                Run::Hyperlink { text, index },
            ]);
            para.indent = Some(LIST_INDENT);
            model.paragraphs.push(para);
        }
    }

    let mut rule = Para::empty();
    rule.border = ParaBorder::Bottom;
    model.paragraphs.push(rule);

    for block in parse_blocks(note.content()) {
        push_block(model, block);
    }
}

fn push_block(model: &mut DocModel, block: Block) {
    match block {
        Block::Heading { level, runs } => {
            let style = match level {
                1 => "Heading1",
                2 => "Heading2",
                3 => "Heading3",
                _ => "Heading4",
            };
            let mut para = Para::styled(style);
            para.runs = map_runs(model, &runs);
            model.paragraphs.push(para);
        }
        Block::Paragraph(runs) => {
            let mapped = map_runs(model, &runs);
            model.paragraphs.push(Para::with_runs(mapped));
        }
        Block::Blockquote(runs) => {
            let mut para = Para::with_runs(map_runs(model, &runs));
            para.indent = Some(LIST_INDENT);
            para.border = ParaBorder::Left;
            model.paragraphs.push(para);
        }
        Block::List { kind, items } => {
            for (i, item) in items.into_iter().enumerate() {
                let marker = match kind {
                    ListKind::Bullet => "• ".to_string(),
                    // Source numbers are ignored; each contiguous run
                    // renumbers from 1.
                    ListKind::Ordered => format!("{}. ", i + 1),
                    ListKind::Checklist => {
                        if item.checked == Some(true) {
                            "☑ ".to_string()
                        } else {
                            "☐ ".to_string()
                        }
                    }
                };
                let mut runs = vec![Run::plain(marker)];
                runs.extend(map_runs(model, &item.runs));
                let mut para = Para::with_runs(runs);
                para.indent = Some(LIST_INDENT);
                model.paragraphs.push(para);
            }
        }
        Block::CodeBlock(lines) => {
            for line in lines {
                let mut para = Para::with_runs(vec![Run::Text {
                    text: line,
                    bold: false,
                    italic: false,
                    code: true,
                }]);
                para.border = ParaBorder::Box;
                para.shaded = true;
                model.paragraphs.push(para);
            }
        }
        Block::HorizontalRule => {
            let mut para = Para::empty();
            para.border = ParaBorder::Bottom;
            model.paragraphs.push(para);
        }
        Block::Blank => model.paragraphs.push(Para::empty()),
    }
}

fn map_runs(model: &mut DocModel, runs: &[InlineRun]) -> Vec<Run> {
    runs.iter()
        .map(|run| match run {
            InlineRun::Plain(s) => Run::plain(s.clone()),
            InlineRun::Bold(s) => Run::bold(s.clone()),
            InlineRun::Italic(s) => Run::Text {
                text: s.clone(),
                bold: false,
                italic: true,
                code: false,
            },
            InlineRun::Code(s) => Run::Text {
                text: s.clone(),
                bold: false,
                italic: false,
                code: true,
            },
            InlineRun::Link { text, url } => {
                model.hyperlinks.push(url.clone());
                Run::Hyperlink {
                    text: text.clone(),
                    index: model.hyperlinks.len() - 1,
                }
            }
        })
        .collect()
}

fn metadata_summary(resolved: &ResolvedNote<'_>) -> String {
    let note = resolved.note;
    let mut parts = Vec::new();
    if !resolved.category_path.is_empty() {
        parts.push(format!("カテゴリ: {}", resolved.category_path));
    }
    parts.push(format!("優先度: {}", note.priority().label()));
    if note.favorite() {
        parts.push("★".to_string());
    }
    if !resolved.tag_names.is_empty() {
        let tags: Vec<String> = resolved.tag_names.iter().map(|t| format!("#{t}")).collect();
        parts.push(tags.join(" "));
    }
    parts.join(" | ")
}
