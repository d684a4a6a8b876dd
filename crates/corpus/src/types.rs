use serde::Serialize;
use std::path::PathBuf;

/// A directory that passed listing: it is content, not a hub or excluded name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Directory name; unique within the content root
    pub slug: String,

    /// The page-defining file the title is read from
    pub page_file: PathBuf,
}

/// Where a content item's title came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// Quoted `title` field
    Metadata,
    /// `<h1>` element
    HtmlHeading,
    /// Markdown `# ` heading
    MarkdownHeading,
    /// Humanized slug
    Slug,
}

/// One unit of content under audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub slug: String,
    pub path: String,
    pub title: String,
    pub title_source: TitleSource,
}

impl ContentItem {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, source: TitleSource) -> Self {
        let slug = slug.into();
        Self {
            path: format!("/{slug}"),
            slug,
            title: title.into(),
            title_source: source,
        }
    }

    /// Lowercased `slug title`, the text keywords are matched against
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.slug, self.title).to_lowercase()
    }
}
