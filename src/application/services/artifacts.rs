//! Writes theme and SEO artifacts into a generated project.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{SeoConfig, StyleBlock};
use crate::infrastructure::traits::FileSystem;

pub const THEME_START_DELIMITER: &str = "/* moltron theme start */";
pub const THEME_END_DELIMITER: &str = "/* moltron theme end */";

/// Theme and metadata file writer.
pub struct ArtifactService {
    fs: Arc<dyn FileSystem>,
}

impl ArtifactService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Inject a theme block into a stylesheet.
    /// Replaces an existing moltron section or appends one if not present.
    #[instrument(skip(self, block))]
    pub fn inject_theme(&self, target: &Path, block: &StyleBlock) -> ApplicationResult<()> {
        let content = if self.fs.exists(target) {
            self.fs
                .read_to_string(target)
                .with_path_context("read stylesheet", target)?
        } else {
            self.fs
                .ensure_parent(target)
                .with_path_context("create parent directory", target)?;
            String::new()
        };

        let new_content = replace_theme_section(&content, &block.to_css());
        debug!("inject_theme: {} bytes", new_content.len());

        self.fs
            .write(target, &new_content)
            .with_path_context("write stylesheet", target)
    }

    /// Write SEO metadata as pretty-printed JSON.
    #[instrument(skip(self, seo))]
    pub fn write_seo(&self, target: &Path, seo: &SeoConfig) -> ApplicationResult<()> {
        let json = render_seo(seo)?;
        self.fs
            .ensure_parent(target)
            .with_path_context("create parent directory", target)?;
        self.fs
            .write(target, &json)
            .with_path_context("write metadata", target)
    }
}

/// Render SEO metadata as pretty JSON with a trailing newline.
pub fn render_seo(seo: &SeoConfig) -> ApplicationResult<String> {
    let mut json =
        serde_json::to_string_pretty(seo).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize SEO metadata".into(),
            source: Box::new(e),
        })?;
    json.push('\n');
    Ok(json)
}

/// Put `css` between the theme delimiters in `content`.
///
/// A well-formed existing section is replaced in place; otherwise a new
/// section is appended and everything else is left untouched. The file's
/// line ending (LF or CRLF) is kept.
pub fn replace_theme_section(content: &str, css: &str) -> String {
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let section: Vec<&str> = std::iter::once(THEME_START_DELIMITER)
        .chain(css.lines())
        .chain(std::iter::once(THEME_END_DELIMITER))
        .collect();

    let lines: Vec<&str> = content.lines().collect();
    let is_marker = |line: &str, marker: &str| line.trim_start().starts_with(marker);
    let bounds = lines
        .iter()
        .position(|l| is_marker(l, THEME_START_DELIMITER))
        .and_then(|start| {
            lines[start..]
                .iter()
                .position(|l| is_marker(l, THEME_END_DELIMITER))
                .map(|offset| (start, start + offset))
        });

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + section.len() + 1);
    match bounds {
        Some((start, end)) => {
            out.extend_from_slice(&lines[..start]);
            out.extend_from_slice(&section);
            out.extend_from_slice(&lines[end + 1..]);
        }
        None => {
            out.extend_from_slice(&lines);
            if !lines.is_empty() {
                out.push("");
            }
            out.extend_from_slice(&section);
        }
    }

    let mut result = out.join(eol);
    result.push_str(eol);
    result
}
