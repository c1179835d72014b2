//! Uploaded image assets and their responsive variants.

use serde::Serialize;
use serde_json::Value;

use crate::media::{ImageSize, MediaResolver};
use crate::schema::{Checker, Schema};
use crate::types::EntryId;

/// One generated size variant of an image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageFormat {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Size in kilobytes, as reported by the CMS.
    pub size: f64,
    #[serde(rename = "sizeInBytes", skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<u64>,
    pub url: String,
}

/// The variants generated for an image, keyed by size name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageFormats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<ImageFormat>,
}

impl ImageFormats {
    pub fn get(&self, size: ImageSize) -> Option<&ImageFormat> {
        match size {
            ImageSize::Thumbnail => self.thumbnail.as_ref(),
            ImageSize::Small => self.small.as_ref(),
            ImageSize::Medium => self.medium.as_ref(),
            ImageSize::Large => self.large.as_ref(),
        }
    }

    /// Present variants, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = (ImageSize, &ImageFormat)> {
        ImageSize::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|f| (s, f)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// An uploaded image: featured images, report images, gallery images and
/// profile photos all share this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAsset {
    pub id: EntryId,
    #[serde(rename = "documentId", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub name: String,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "ImageFormats::is_empty")]
    pub formats: ImageFormats,
    pub hash: String,
    pub ext: String,
    pub mime: String,
    pub size: f64,
    /// Absolute or root-relative; resolve with [`MediaResolver`].
    pub url: String,
    #[serde(rename = "previewUrl", skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl ImageAsset {
    pub fn variant(&self, size: ImageSize) -> Option<&ImageFormat> {
        self.formats.get(size)
    }

    /// URL of the narrowest variant at least `min_width` pixels wide.
    ///
    /// Falls back to the original when no variant is wide enough.
    pub fn best_for_width(&self, min_width: u32) -> &str {
        self.formats
            .iter()
            .find(|(_, f)| f.width >= min_width)
            .map(|(_, f)| f.url.as_str())
            .unwrap_or(self.url.as_str())
    }

    /// `srcset` attribute value covering every variant plus the original.
    pub fn srcset(&self, resolver: &MediaResolver) -> String {
        let mut entries: Vec<(u32, String)> = self
            .formats
            .iter()
            .map(|(_, f)| (f.width, resolver.resolve(&f.url)))
            .collect();
        if entries.iter().all(|(w, _)| *w != self.width) {
            entries.push((self.width, resolver.resolve(&self.url)));
        }
        entries.sort_by_key(|(w, _)| *w);
        entries
            .into_iter()
            .map(|(w, url)| format!("{url} {w}w"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Alternative text, or `fallback` when the editor left it blank.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alternative_text.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => fallback,
        }
    }
}

impl Schema for ImageFormat {
    const EXPECTED: &'static str = "image format";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let name = cx.required(obj, "name");
        let hash = cx.optional(obj, "hash");
        let ext = cx.optional(obj, "ext");
        let mime = cx.optional(obj, "mime");
        let width = cx.required(obj, "width");
        let height = cx.required(obj, "height");
        let size = cx.required(obj, "size");
        let size_in_bytes = cx.optional(obj, "sizeInBytes");
        let url = cx.required(obj, "url");
        Some(Self {
            name: name?,
            hash: hash?,
            ext: ext?,
            mime: mime?,
            width: width?,
            height: height?,
            size: size?,
            size_in_bytes: size_in_bytes?,
            url: url?,
        })
    }
}

impl Schema for ImageFormats {
    const EXPECTED: &'static str = "format map";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let thumbnail = cx.optional(obj, "thumbnail");
        let small = cx.optional(obj, "small");
        let medium = cx.optional(obj, "medium");
        let large = cx.optional(obj, "large");
        Some(Self {
            thumbnail: thumbnail?,
            small: small?,
            medium: medium?,
            large: large?,
        })
    }
}

impl Schema for ImageAsset {
    const EXPECTED: &'static str = "image";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let id = cx.required(obj, "id");
        let document_id = cx.optional(obj, "documentId");
        let name = cx.required(obj, "name");
        let alternative_text = cx.nullable(obj, "alternativeText");
        let caption = cx.nullable(obj, "caption");
        let width = cx.required(obj, "width");
        let height = cx.required(obj, "height");
        let formats = cx.optional(obj, "formats");
        let hash = cx.required(obj, "hash");
        let ext = cx.required(obj, "ext");
        let mime = cx.required(obj, "mime");
        let size = cx.required(obj, "size");
        let url = cx.required(obj, "url");
        let preview_url = cx.optional_nullable(obj, "previewUrl");
        let provider = cx.optional(obj, "provider");
        Some(Self {
            id: id?,
            document_id: document_id?,
            name: name?,
            alternative_text: alternative_text?,
            caption: caption?,
            width: width?,
            height: height?,
            formats: formats?.unwrap_or_default(),
            hash: hash?,
            ext: ext?,
            mime: mime?,
            size: size?,
            url: url?,
            preview_url: preview_url?,
            provider: provider?,
        })
    }
}
