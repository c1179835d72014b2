//! Media URL resolution and responsive image variants.

use serde::Serialize;

/// Schemes treated as already-absolute.
const ABSOLUTE_PREFIXES: &[&str] = &["https://", "http://"];

/// Resolve a possibly root-relative media path against `base_url`.
///
/// - `None` or `""` resolves to `""`, meaning "no image".
/// - `http://` and `https://` URLs are returned unchanged.
/// - Protocol-relative URLs (`//host/path`) take the scheme of the base.
/// - Anything else is joined onto the base with exactly one `/` between.
///
/// ```
/// use rawav_core::media::resolve_media_url;
///
/// let base = "https://content.example.com";
/// assert_eq!(resolve_media_url(base, Some("/uploads/a.jpg")), "https://content.example.com/uploads/a.jpg");
/// assert_eq!(resolve_media_url(base, Some("https://cdn.example.com/a.jpg")), "https://cdn.example.com/a.jpg");
/// assert_eq!(resolve_media_url(base, Some("//cdn.example.com/a.jpg")), "https://cdn.example.com/a.jpg");
/// assert_eq!(resolve_media_url(base, None), "");
/// ```
pub fn resolve_media_url(base_url: &str, url: Option<&str>) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return String::new();
    };

    if ABSOLUTE_PREFIXES.iter().any(|p| url.starts_with(p)) {
        return url.to_string();
    }

    if url.starts_with("//") {
        return match base_url.split_once("//") {
            Some((scheme, _)) if !scheme.is_empty() => format!("{scheme}{url}"),
            _ => url.to_string(),
        };
    }

    let base = base_url.trim_end_matches('/');
    let path = url.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Media resolver bound to one content host.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base_url: String,
}

impl MediaResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, url: &str) -> String {
        resolve_media_url(&self.base_url, Some(url))
    }

    pub fn resolve_opt(&self, url: Option<&str>) -> String {
        resolve_media_url(&self.base_url, url)
    }
}

/// Named responsive variants generated for every uploaded image.
///
/// Breakpoints follow the CMS upload plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// All variants, narrowest first.
    pub const ALL: [ImageSize; 4] = [
        ImageSize::Thumbnail,
        ImageSize::Small,
        ImageSize::Medium,
        ImageSize::Large,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Thumbnail => "thumbnail",
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
        }
    }

    /// Target width in pixels the CMS resizes to for this variant.
    pub const fn breakpoint(self) -> u32 {
        match self {
            ImageSize::Thumbnail => 250,
            ImageSize::Small => 500,
            ImageSize::Medium => 750,
            ImageSize::Large => 1000,
        }
    }
}
