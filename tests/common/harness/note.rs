//! Builder for test note files with sensible defaults.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

/// Builder for creating note files with sensible defaults.
///
/// Renders the YAML frontmatter plus body that `kiroku` parses, with a
/// fluent API for setting optional fields. Timestamps default to a fixed
/// instant so exported metadata is deterministic.
#[derive(Debug)]
pub struct TestNote {
    title: String,
    category: String,
    tags: Vec<String>,
    urls: Vec<(Option<String>, String)>,
    favorite: bool,
    priority: Option<String>,
    created: String,
    updated: String,
    body: String,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: String::new(),
            tags: Vec::new(),
            urls: Vec::new(),
            favorite: false,
            priority: None,
            created: "2024-01-15T10:30:00Z".to_string(),
            updated: "2024-01-15T10:30:00Z".to_string(),
            body: String::new(),
        }
    }

    /// Sets the category breadcrumb.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds a titled reference URL.
    pub fn url(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.push((Some(title.into()), url.into()));
        self
    }

    /// Adds a bare reference URL.
    pub fn bare_url(mut self, url: impl Into<String>) -> Self {
        self.urls.push((None, url.into()));
        self
    }

    /// Marks the note as a favorite.
    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Sets the priority (`low`, `medium`, `high`).
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the complete note file content.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: \"{}\"\n", self.title));
        if !self.category.is_empty() {
            out.push_str(&format!("category: \"{}\"\n", self.category));
        }
        if !self.tags.is_empty() {
            out.push_str(&format!("tags: [{}]\n", self.tags.join(", ")));
        }
        if !self.urls.is_empty() {
            out.push_str("urls:\n");
            for (title, url) in &self.urls {
                if let Some(title) = title {
                    out.push_str(&format!("  - title: \"{title}\"\n    url: {url}\n"));
                } else {
                    out.push_str(&format!("  - url: {url}\n"));
                }
            }
        }
        if self.favorite {
            out.push_str("favorite: true\n");
        }
        if let Some(priority) = &self.priority {
            out.push_str(&format!("priority: {priority}\n"));
        }
        out.push_str(&format!("created: {}\n", self.created));
        out.push_str(&format!("updated: {}\n", self.updated));
        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_renders_minimal_frontmatter() {
        let rendered = TestNote::new("Minimal").render();
        assert!(rendered.starts_with("---\ntitle: \"Minimal\"\n"));
        assert!(rendered.contains("created: 2024-01-15T10:30:00Z"));
        assert!(rendered.ends_with("---\n"));
    }

    #[test]
    fn test_note_builder_fluent() {
        let rendered = TestNote::new("Full")
            .category("仕事/メモ")
            .tag("rust")
            .url("Example", "https://example.com")
            .favorite()
            .priority("high")
            .body("# Heading\n")
            .render();

        assert!(rendered.contains("category: \"仕事/メモ\""));
        assert!(rendered.contains("tags: [rust]"));
        assert!(rendered.contains("  - title: \"Example\"\n    url: https://example.com"));
        assert!(rendered.contains("favorite: true"));
        assert!(rendered.contains("priority: high"));
        assert!(rendered.ends_with("# Heading\n"));
    }
}
