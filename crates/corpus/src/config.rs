use serde::{Deserialize, Serialize};

/// Which directories under the content root count as auditable content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Exact directory names skipped entirely
    pub excluded: Vec<String>,

    /// Regular expressions matched against directory names; matches are hub pages
    pub hub_patterns: Vec<String>,

    /// Page-defining file names, tried in order
    pub page_files: Vec<String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            excluded: strings(&[
                "api",
                "components",
                "lib",
                "styles",
                "public",
                "fonts",
                "images",
                "node_modules",
            ]),
            hub_patterns: strings(&[
                // route groups, private folders and dynamic segments
                r"^\(.*\)$",
                r"^_",
                r"^\[.*\]$",
                r"^\.",
                // navigational hubs
                r"-hub$",
                r"^(services|locations|blog|resources)$",
            ]),
            page_files: strings(&[
                "page.tsx",
                "page.jsx",
                "page.js",
                "page.mdx",
                "page.md",
                "index.mdx",
                "index.md",
                "index.html",
            ]),
        }
    }
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_files.is_empty() {
            return Err("listing.page_files must name at least one file".to_string());
        }
        if let Some(blank) = self.page_files.iter().find(|name| name.trim().is_empty()) {
            return Err(format!("listing.page_files contains a blank entry ({blank:?})"));
        }
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
