//! Markdown renderer.
//!
//! Mostly a pass-through: the body already is the editor's markdown dialect,
//! so this path only normalizes the surrounding structure (title heading,
//! metadata header, URL section) and substitutes image placeholders.

use crate::domain::Note;
use crate::export::{ExportContext, ExportOptions, format_timestamp, replace_images};

/// Renders a note as a normalized markdown document.
pub fn render_markdown(note: &Note, options: &ExportOptions, context: &ExportContext) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", note.title()));

    let meta = metadata_lines(note, options, context);
    if !meta.is_empty() {
        for line in &meta {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\n---\n\n");
    }

    out.push_str(&replace_images(note.content()));

    if options.include_urls && !note.urls().is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("\n---\n\n## 参考URL\n\n");
        for entry in note.urls() {
            match &entry.title {
                Some(title) => out.push_str(&format!("- [{}]({})\n", title, entry.url)),
                None => out.push_str(&format!("- {}\n", entry.url)),
            }
        }
    }

    out
}

fn metadata_lines(note: &Note, options: &ExportOptions, context: &ExportContext) -> Vec<String> {
    let mut lines = Vec::new();
    if options.include_category && !context.category_path.is_empty() {
        lines.push(format!("**カテゴリ**: {}", context.category_path));
    }
    if options.include_tags && !context.tag_names.is_empty() {
        let tags: Vec<String> = context
            .tag_names
            .iter()
            .map(|t| format!("`#{t}`"))
            .collect();
        lines.push(format!("**タグ**: {}", tags.join(" ")));
    }
    if options.include_created {
        lines.push(format!("**作成日時**: {}", format_timestamp(note.created())));
    }
    if options.include_updated {
        lines.push(format!("**更新日時**: {}", format_timestamp(note.updated())));
    }
    lines
}
