use serde::{Deserialize, Serialize};

/// Substring heuristics identifying vendor-inserted attribution.
///
/// Matching is case-sensitive and purely textual, so a change in the vendor's
/// markup can make it miss the badge or catch unrelated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingRules {
    /// Matched against link targets and image sources.
    pub vendor: String,
    /// Matched against element text (or `alt` when the text is empty).
    pub markers: Vec<String>,
    /// Matched against image `alt` text.
    pub image_alt_marker: String,
}

impl Default for BrandingRules {
    fn default() -> Self {
        Self {
            vendor: "spline".to_string(),
            markers: vec!["Built with".to_string(), "Spline".to_string()],
            image_alt_marker: "Spline".to_string(),
        }
    }
}

/// Elements inspected for marker text.
pub const TEXT_SELECTOR: &str = "div, span, p, a, img";

impl BrandingRules {
    pub fn link_matches(&self, href: &str) -> bool {
        contains_needle(href, &self.vendor)
    }

    pub fn text_matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| contains_needle(text, marker))
    }

    pub fn image_matches(&self, src: &str, alt: &str) -> bool {
        contains_needle(src, &self.vendor) || contains_needle(alt, &self.image_alt_marker)
    }
}

/// Text an element is judged by: its text content, falling back to `alt`.
pub fn candidate_text<'a>(text_content: Option<&'a str>, alt: Option<&'a str>) -> &'a str {
    text_content.filter(|t| !t.is_empty()).or(alt).unwrap_or_default()
}

// An empty needle would match every element.
fn contains_needle(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Inline style overrides used to hide a matched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideStyle {
    /// Collapse a link completely, including its box.
    Link,
    /// Hide an element carrying marker text.
    Text,
    /// Remove a branded image from layout.
    Image,
}

impl HideStyle {
    pub fn css_text(self) -> &'static str {
        match self {
            Self::Link => {
                "display:none!important;opacity:0!important;visibility:hidden!important;width:0!important;height:0!important;overflow:hidden!important;position:absolute!important;"
            }
            Self::Text => "display:none!important;opacity:0!important;visibility:hidden!important;",
            Self::Image => "display:none!important;",
        }
    }
}
