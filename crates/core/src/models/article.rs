use serde::Serialize;
use serde_json::Value;

use crate::models::author::AuthorProfile;
use crate::models::image::ImageAsset;
use crate::rich_text::RichText;
use crate::schema::{Checker, Entity, Schema};
use crate::types::{EntryId, PublishDate, Timestamp};

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: EntryId,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Content")]
    pub content: RichText,
    #[serde(rename = "Date")]
    pub date: PublishDate,
    pub authors: Vec<AuthorProfile>,
    #[serde(rename = "Featured_Image", skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<ImageAsset>,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}

impl Schema for Article {
    const EXPECTED: &'static str = "article";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let id = cx.required(obj, "id");
        let document_id = cx.required(obj, "documentId");
        let title = cx.required(obj, "Title");
        let slug = cx.required(obj, "Slug");
        let content = cx.required(obj, "Content");
        let date = cx.required(obj, "Date");
        let authors = cx.optional(obj, "authors");
        let featured_image = cx.optional(obj, "Featured_Image");
        let created_at = cx.required(obj, "createdAt");
        let updated_at = cx.required(obj, "updatedAt");
        let published_at = cx.required(obj, "publishedAt");
        Some(Self {
            id: id?,
            document_id: document_id?,
            title: title?,
            slug: slug?,
            content: content?,
            date: date?,
            authors: authors?.unwrap_or_default(),
            featured_image: featured_image?,
            created_at: created_at?,
            updated_at: updated_at?,
            published_at: published_at?,
        })
    }
}

impl Entity for Article {
    const NAME: &'static str = "article";
}
