//! SEO metadata for the generated app's root layout

use serde::Serialize;

pub const TITLE_SUFFIX: &str = "Premium Frontend Experience";

pub const DEFAULT_DESCRIPTION: &str = "A distinctive, production-grade frontend interface crafted with meticulous attention to aesthetic details.";

pub const KEYWORDS: [&str; 8] = [
    "frontend", "design", "web", "react", "nextjs", "shadcn", "ui", "ux",
];

/// Metadata record in the shape of Next.js `Metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: String,
    pub viewport: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build the metadata record for a project.
///
/// Only the top-level description falls back to [`DEFAULT_DESCRIPTION`]
/// (when absent or empty); the social-sharing blocks carry the caller's
/// description as given.
pub fn generate_seo_config(name: &str, description: Option<&str>) -> SeoConfig {
    let given = description.map(str::to_string);
    SeoConfig {
        title: format!("{} - {}", name, TITLE_SUFFIX),
        description: description
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string(),
        keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
        open_graph: OpenGraph {
            title: name.to_string(),
            description: given.clone(),
            kind: "website".into(),
            locale: "en_US".into(),
        },
        twitter: TwitterCard {
            card: "summary_large_image".into(),
            title: name.to_string(),
            description: given,
        },
        robots: "index, follow".into(),
        viewport: "width=device-width, initial-scale=1".into(),
    }
}
