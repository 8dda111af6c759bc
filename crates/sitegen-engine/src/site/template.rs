use std::fs;
use std::path::Path;

use super::SiteError;

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Root-relative attribute prefixes rewritten to the site's base path.
    const ROOT_RELATIVE: [&'static str; 2] = ["href=\"/", "src=\"/"];

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        if !path.is_file() {
            return Err(SiteError::NotFound(path.to_path_buf()));
        }
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Substitutes the placeholders, then points root-relative `href`/`src`
    /// attributes (in the template and in `content`) at `base_path`.
    ///
    /// `base_path` is expected to end with `/`; the default `/` leaves links
    /// unchanged.
    pub fn fill(&self, title: &str, content: &str, base_path: &str) -> String {
        let mut page = self
            .source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);
        for prefix in Self::ROOT_RELATIVE {
            let attr = &prefix[..prefix.len() - 1];
            page = page.replace(prefix, &format!("{attr}{base_path}"));
        }
        page
    }
}
