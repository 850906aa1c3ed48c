use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// A stylesheet URL pulled in with `@import` (Google Fonts and friends).
    Google,
    /// A font file URL declared with `@font-face`.
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFont {
    pub name: String,
    pub url: String,
    pub source: FontSource,
    /// The original `@font-face { ... }` block when the font came from parsed
    /// HTML. The generator emits it verbatim instead of synthesizing one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_css: Option<String>,
}

impl CustomFont {
    pub fn google(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            source: FontSource::Google,
            raw_css: None,
        }
    }

    pub fn url(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            source: FontSource::Url,
            raw_css: None,
        }
    }
}
