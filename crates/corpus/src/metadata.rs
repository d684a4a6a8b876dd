use crate::types::{ContentEntry, ContentItem, TitleSource};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;

/// A pure title heuristic over a page body
pub type TitleStrategy = fn(&str) -> Option<(String, TitleSource)>;

static TITLE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\btitle\s*[:=]\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#).expect("valid regex")
});
static HTML_H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").expect("valid regex"));
static MARKDOWN_H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)[ \t#]*$").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Ordered chain of title strategies; the first hit wins
pub struct TitleExtractor {
    strategies: Vec<TitleStrategy>,
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new(vec![
            metadata_title as TitleStrategy,
            first_heading as TitleStrategy,
        ])
    }
}

impl TitleExtractor {
    pub fn new(strategies: Vec<TitleStrategy>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, body: &str) -> Option<(String, TitleSource)> {
        self.strategies.iter().find_map(|strategy| strategy(body))
    }

    /// Read an entry's page file and derive its title.
    ///
    /// Never fails: unreadable pages and bodies without a title fall back to the humanized slug.
    pub fn read_item(&self, entry: &ContentEntry) -> ContentItem {
        let extracted = match fs::read_to_string(&entry.page_file) {
            Ok(body) => self.extract(&body),
            Err(e) => {
                log::warn!("Failed to read {}: {e}", entry.page_file.display());
                None
            }
        };

        match extracted {
            Some((title, source)) => ContentItem::new(&entry.slug, title, source),
            None => {
                log::debug!("No title in {}, using slug", entry.page_file.display());
                ContentItem::new(&entry.slug, humanize_slug(&entry.slug), TitleSource::Slug)
            }
        }
    }
}

/// `clean-room-standards` -> `clean room standards`
#[must_use]
pub fn humanize_slug(slug: &str) -> String {
    slug.replace('-', " ")
}

/// First quoted `title:` / `title =` field outside markup tags
pub fn metadata_title(body: &str) -> Option<(String, TitleSource)> {
    let caps = TITLE_FIELD
        .captures_iter(body)
        .find(|caps| caps.get(0).is_some_and(|m| !inside_tag(body, m.start())))?;
    let raw = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
    let title = raw.as_str().split('|').next().unwrap_or_default().trim();
    non_empty(title).map(|title| (title, TitleSource::Metadata))
}

/// Whichever of `<h1>` or markdown `# ` comes first in the body
pub fn first_heading(body: &str) -> Option<(String, TitleSource)> {
    let html = html_heading(body).map(|(at, title)| (at, title, TitleSource::HtmlHeading));
    let markdown =
        markdown_heading(body).map(|(at, title)| (at, title, TitleSource::MarkdownHeading));

    [html, markdown]
        .into_iter()
        .flatten()
        .min_by_key(|(at, _, _)| *at)
        .map(|(_, title, source)| (title, source))
}

// `<iframe title="...">` is an attribute, not page metadata
fn inside_tag(body: &str, at: usize) -> bool {
    let before = &body[..at];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

fn html_heading(body: &str) -> Option<(usize, String)> {
    let caps = HTML_H1.captures(body)?;
    let start = caps.get(0)?.start();
    let inner = TAG.replace_all(&caps[1], " ");
    non_empty(&collapse_whitespace(&inner)).map(|title| (start, title))
}

fn markdown_heading(body: &str) -> Option<(usize, String)> {
    let caps = MARKDOWN_H1.captures(body)?;
    let start = caps.get(0)?.start();
    non_empty(caps[1].trim()).map(|title| (start, title))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn title_of(body: &str) -> Option<(String, TitleSource)> {
        TitleExtractor::default().extract(body)
    }

    #[test]
    fn metadata_title_takes_text_before_pipe() {
        let body = r#"
export const metadata = {
  title: "Clean Room Construction Standards | Acme Builders",
  description: "...",
};
export default function Page() { return <h1>Something Else</h1>; }
"#;
        assert_eq!(
            title_of(body),
            Some((
                "Clean Room Construction Standards".to_string(),
                TitleSource::Metadata
            ))
        );
    }

    #[test]
    fn first_title_field_wins() {
        let body = r#"title: 'Medical Office Buildouts'
openGraph: { title: "Other" }"#;
        assert_eq!(
            title_of(body).map(|(t, _)| t),
            Some("Medical Office Buildouts".to_string())
        );
    }

    #[test]
    fn apostrophes_inside_double_quotes_survive() {
        let body = r#"title: "Builder's Guide to Zoning""#;
        assert_eq!(
            title_of(body).map(|(t, _)| t),
            Some("Builder's Guide to Zoning".to_string())
        );
    }

    #[test]
    fn falls_back_to_html_heading() {
        let body = r#"<main><h1 className="text-4xl">
            Pet-Friendly <span>Home Designs</span>
        </h1></main>"#;
        assert_eq!(
            title_of(body),
            Some((
                "Pet-Friendly Home Designs".to_string(),
                TitleSource::HtmlHeading
            ))
        );
    }

    #[test]
    fn falls_back_to_markdown_heading() {
        let body = "---\nlayout: post\n---\n\n# Retail Buildout Timeline #\n\nBody text.";
        assert_eq!(
            title_of(body),
            Some((
                "Retail Buildout Timeline".to_string(),
                TitleSource::MarkdownHeading
            ))
        );
    }

    #[test]
    fn blank_title_field_is_not_a_title() {
        assert_eq!(title_of(r#"title: " | Brand""#), None);
        assert_eq!(title_of("## Only a second level heading"), None);
    }

    #[test]
    fn custom_chain_respects_order() {
        let extractor = TitleExtractor::new(vec![first_heading as TitleStrategy]);
        assert_eq!(extractor.extract(r#"title: "Ignored""#), None);
    }

    #[test]
    fn attribute_title_does_not_shadow_heading() {
        let body = r#"<iframe title="Map of Tampa" src="x" /><h1>Clean Room Construction Standards</h1>"#;
        assert_eq!(
            title_of(body),
            Some((
                "Clean Room Construction Standards".to_string(),
                TitleSource::HtmlHeading
            ))
        );

        let body = r#"<Image src="/hero.png" title={"Hero"} /><a href="/" title='Home'>x</a>"#;
        assert_eq!(title_of(body), None);
    }

    #[test]
    fn metadata_after_markup_still_counts() {
        let body = r#"export const Hero = () => <a title="Home">x</a>;
export const metadata = { title: "Medical Gas Systems | Acme" };"#;
        assert_eq!(
            title_of(body),
            Some(("Medical Gas Systems".to_string(), TitleSource::Metadata))
        );
    }

    #[test]
    fn earliest_heading_wins_across_kinds() {
        let body = "# Intro Heading\n\nSome text\n\n<h1>Later Heading</h1>\n";
        assert_eq!(
            title_of(body),
            Some(("Intro Heading".to_string(), TitleSource::MarkdownHeading))
        );

        let body = "<h1>Hero Heading</h1>\n\n# Body Heading\n";
        assert_eq!(
            title_of(body),
            Some(("Hero Heading".to_string(), TitleSource::HtmlHeading))
        );
    }

    #[test]
    fn humanizes_slug() {
        assert_eq!(
            humanize_slug("pet-friendly-home-designs-in-tampa"),
            "pet friendly home designs in tampa"
        );
    }

    #[test]
    fn read_item_falls_back_to_slug() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("zoning-variance-guide");
        std::fs::create_dir_all(&dir).unwrap();
        let page_file = dir.join("page.tsx");
        std::fs::write(&page_file, "export default function Page() { return null; }").unwrap();

        let entry = ContentEntry {
            slug: "zoning-variance-guide".to_string(),
            page_file,
        };
        let item = TitleExtractor::default().read_item(&entry);
        assert_eq!(item.title, "zoning variance guide");
        assert_eq!(item.title_source, TitleSource::Slug);
        assert_eq!(item.path, "/zoning-variance-guide");
    }

    #[test]
    fn read_item_survives_unreadable_page() {
        let temp = tempdir().unwrap();
        let entry = ContentEntry {
            slug: "ghost-page".to_string(),
            page_file: temp.path().join("ghost-page/page.tsx"),
        };
        let item = TitleExtractor::default().read_item(&entry);
        assert_eq!(item.title, "ghost page");
        assert_eq!(item.title_source, TitleSource::Slug);
    }
}
