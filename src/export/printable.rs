//! Print-document renderer.
//!
//! Produces a complete, self-contained HTML document meant to be saved as
//! PDF through the browser's print dialog. The body goes through a
//! simplified markdown stripper rather than the full block parser; the
//! result is plain readable text with a few typographic substitutions.

use std::sync::OnceLock;

use minijinja::{Environment, context};
use regex::Regex;
use serde::Serialize;

use crate::domain::Note;
use crate::export::{ExportContext, ExportOptions, IMAGE_PLACEHOLDER, format_timestamp};

/// Embedded template for the print document.
///
/// Named with an `.html` extension so minijinja auto-escapes every
/// interpolation; the pre-escaped body is the only value marked safe.
const PRINT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
body { font-family: "Hiragino Sans", "Yu Gothic", sans-serif; margin: 2rem auto; max-width: 46rem; line-height: 1.7; color: #222; }
h1 { border-bottom: 2px solid #444; padding-bottom: 0.3rem; }
.banner { background: #fff8dc; border: 1px solid #e0c96e; border-radius: 4px; padding: 0.8rem 1rem; margin-bottom: 1.5rem; font-size: 0.9rem; }
.banner button { margin-top: 0.4rem; }
.meta { background: #f5f5f5; border-radius: 4px; padding: 0.6rem 1rem; margin: 1rem 0; font-size: 0.9rem; }
.content { white-space: normal; }
.urls { padding-left: 1.2rem; }
hr { border: none; border-top: 1px solid #ccc; margin: 1.5rem 0; }
@media print { .no-print { display: none; } body { margin: 0; max-width: none; } }
</style>
</head>
<body>
<div class="banner no-print">
<p>このページを PDF として保存するには、印刷ダイアログで「PDF に保存」を選択してください。</p>
<p>保存ファイル名: {{ file_name }}.pdf</p>
<button onclick="this.parentElement.remove()">閉じる</button>
</div>
<h1>{{ title }}</h1>
{%- if meta_lines %}
<div class="meta">
{%- for line in meta_lines %}
<div>{{ line }}</div>
{%- endfor %}
</div>
{%- endif %}
<hr>
<div class="content">{{ body|safe }}</div>
{%- if urls %}
<hr>
<ul class="urls">
{%- for entry in urls %}
<li><a href="{{ entry.url }}" target="_blank" rel="noopener">{{ entry.label }}</a></li>
{%- endfor %}
</ul>
{%- endif %}
<script>window.addEventListener('load', function () { setTimeout(function () { window.print(); }, 500); });</script>
</body>
</html>
"##;

#[derive(Serialize)]
struct UrlEntry {
    label: String,
    url: String,
}

/// Renders the complete print HTML document for one note.
///
/// `file_name` is the artifact base name shown in the instructions banner.
/// Every user-supplied string is HTML-escaped before interpolation; this is
/// a security contract, not a formatting choice.
pub fn render_printable(
    note: &Note,
    options: &ExportOptions,
    context: &ExportContext,
    file_name: &str,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("print.html", PRINT_TEMPLATE)?;
    let tmpl = env.get_template("print.html")?;

    let stripped = strip_markdown(note.content());
    let body = escape_html(&stripped).replace('\n', "<br>\n");

    let urls: Vec<UrlEntry> = if options.include_urls {
        note.urls()
            .iter()
            .map(|u| UrlEntry {
                label: u.title.clone().unwrap_or_else(|| u.url.clone()),
                url: u.url.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    tmpl.render(context! {
        title => note.title(),
        file_name => file_name,
        meta_lines => metadata_lines(note, options, context),
        body => body,
        urls => urls,
    })
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

fn strip_res() -> &'static [Regex; 6] {
    static RES: OnceLock<[Regex; 6]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap(),
            Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap(),
            Regex::new(r"`([^`]+)`").unwrap(),
            Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap(),
            Regex::new(r"\*([^*]+)\*|_([^_]+)_").unwrap(),
            Regex::new(r"^#{1,6}\s+").unwrap(),
        ]
    })
}

/// Simplified markdown stripper for the print path.
///
/// Not the full block parser: heading and emphasis markers are removed,
/// inline code is unwrapped, links become `text (url)`, images become the
/// placeholder, bullets become `•`, blockquote markers become `│`, and fence
/// lines are dropped so code blocks read as bare text.
pub fn strip_markdown(content: &str) -> String {
    let [image_re, link_re, code_re, bold_re, italic_re, heading_re] = strip_res();
    let mut lines = Vec::new();

    for line in content.lines() {
        if line.trim() == "```" {
            continue;
        }

        let mut out = heading_re.replace(line, "").into_owned();
        if let Some(rest) = out.strip_prefix("> ") {
            out = format!("│ {rest}");
        } else if let Some(caps) = bullet_prefix_re().captures(&out) {
            out = format!("• {}", &caps[1]);
        }

        let out = image_re.replace_all(&out, IMAGE_PLACEHOLDER);
        let out = link_re.replace_all(&out, "$1 ($2)");
        let out = code_re.replace_all(&out, "$1");
        let out = bold_re.replace_all(&out, "$1$2");
        let out = italic_re.replace_all(&out, "$1$2");

        lines.push(out.into_owned());
    }

    lines.join("\n")
}

fn bullet_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*+]\s+(.*)$").unwrap())
}

/// Minimal HTML escaping for the pre-converted body text.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
