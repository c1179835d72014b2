use serde::Serialize;
use serde_json::Value;

use crate::models::author::AuthorProfile;
use crate::models::image::ImageAsset;
use crate::schema::{Checker, Entity, Schema};
use crate::types::{EntryId, PublishDate, Timestamp};

/// A photo gallery.
///
/// The CMS stores the gallery slug in a lowercase `slug` field, unlike
/// articles and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub id: EntryId,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    pub slug: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Date")]
    pub date: PublishDate,
    pub authors: Vec<AuthorProfile>,
    #[serde(rename = "Images")]
    pub images: Vec<ImageAsset>,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}

impl Gallery {
    /// First image, used as the gallery thumbnail in listings.
    pub fn cover(&self) -> Option<&ImageAsset> {
        self.images.first()
    }
}

impl Schema for Gallery {
    const EXPECTED: &'static str = "gallery";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let id = cx.required(obj, "id");
        let document_id = cx.required(obj, "documentId");
        let title = cx.required(obj, "Title");
        let slug = cx.required(obj, "slug");
        let description = cx.required(obj, "Description");
        let date = cx.required(obj, "Date");
        let authors = cx.optional(obj, "authors");
        let images = cx.required(obj, "Images");
        let created_at = cx.required(obj, "createdAt");
        let updated_at = cx.required(obj, "updatedAt");
        let published_at = cx.required(obj, "publishedAt");
        Some(Self {
            id: id?,
            document_id: document_id?,
            title: title?,
            slug: slug?,
            description: description?,
            date: date?,
            authors: authors?.unwrap_or_default(),
            images: images?,
            created_at: created_at?,
            updated_at: updated_at?,
            published_at: published_at?,
        })
    }
}

impl Entity for Gallery {
    const NAME: &'static str = "gallery";
}
