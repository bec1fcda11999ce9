//! Plain-text renderer.

use crate::domain::Note;
use crate::export::{ExportContext, ExportOptions, format_timestamp, replace_images};

const DIVIDER_WIDTH: usize = 40;

/// Renders a note as a line-oriented plain text document.
///
/// Layout: title, a `=` underline twice the title's character count, a blank
/// line, the enabled metadata lines followed by a divider, the body with
/// image tags replaced by the placeholder, and an optional numbered URL
/// section.
///
/// Inline markers (bold, italic, code) pass through literally: plain-text
/// export preserves the author's markup characters rather than interpreting
/// them.
pub fn render_text(note: &Note, options: &ExportOptions, context: &ExportContext) -> String {
    let divider = "-".repeat(DIVIDER_WIDTH);
    let mut out = String::new();

    out.push_str(note.title());
    out.push('\n');
    out.push_str(&"=".repeat(note.title().chars().count() * 2));
    out.push_str("\n\n");

    let meta = metadata_lines(note, options, context);
    if !meta.is_empty() {
        for line in &meta {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&divider);
        out.push_str("\n\n");
    }

    out.push_str(&replace_images(note.content()));

    if options.include_urls && !note.urls().is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&divider);
        out.push('\n');
        for (i, entry) in note.urls().iter().enumerate() {
            match &entry.title {
                Some(title) => {
                    out.push_str(&format!("{}. {}\n   {}\n", i + 1, title, entry.url));
                }
                None => {
                    out.push_str(&format!("{}. {}\n", i + 1, entry.url));
                }
            }
        }
    }

    out
}

fn metadata_lines(note: &Note, options: &ExportOptions, context: &ExportContext) -> Vec<String> {
    let mut lines = Vec::new();
    if options.include_category && !context.category_path.is_empty() {
        lines.push(format!("カテゴリ: {}", context.category_path));
    }
    if options.include_tags && !context.tag_names.is_empty() {
        let tags: Vec<String> = context.tag_names.iter().map(|t| format!("#{t}")).collect();
        lines.push(format!("タグ: {}", tags.join(" ")));
    }
    if options.include_created {
        lines.push(format!("作成日時: {}", format_timestamp(note.created())));
    }
    if options.include_updated {
        lines.push(format!("更新日時: {}", format_timestamp(note.updated())));
    }
    lines
}
