//! Author profiles attached to articles, reports, and galleries.

use serde::Serialize;
use serde_json::Value;

use crate::models::image::ImageAsset;
use crate::rich_text::Biography;
use crate::schema::{Checker, Entity, Schema};
use crate::types::{EntryId, Timestamp};

/// How an author relates to the publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorType {
    Founder,
    ExternalContributor,
    Guest,
}

impl AuthorType {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorType::Founder => "founder",
            AuthorType::ExternalContributor => "external_contributor",
            AuthorType::Guest => "guest",
        }
    }
}

impl Schema for AuthorType {
    const EXPECTED: &'static str = "one of founder, external_contributor, guest";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value.as_str() {
            Some("founder") => Some(AuthorType::Founder),
            Some("external_contributor") => Some(AuthorType::ExternalContributor),
            Some("guest") => Some(AuthorType::Guest),
            Some(other) => {
                cx.violation(Self::EXPECTED, format!("{other:?}"));
                None
            }
            None => {
                cx.mismatch(Self::EXPECTED, value);
                None
            }
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.facebook.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorProfile {
    pub id: EntryId,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Biography>,
    #[serde(rename = "profilePhoto", skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<ImageAsset>,
    #[serde(rename = "authorType")]
    pub author_type: AuthorType,
    #[serde(rename = "isPublicAuthor")]
    pub is_public_author: bool,
    #[serde(rename = "authorSlug", skip_serializing_if = "Option::is_none")]
    pub author_slug: Option<String>,
    #[serde(rename = "showContributionCount")]
    pub show_contribution_count: bool,
    #[serde(flatten)]
    pub social_links: SocialLinks,
    /// Lower weights sort first.
    #[serde(rename = "orderWeight")]
    pub order_weight: i64,
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

impl Schema for AuthorProfile {
    const EXPECTED: &'static str = "author profile";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let id = cx.required(obj, "id");
        let document_id = cx.required(obj, "documentId");
        let display_name = cx.required(obj, "displayName");
        let position = cx.required(obj, "position");
        let bio = cx.optional(obj, "bio");
        let profile_photo = cx.optional(obj, "profilePhoto");
        let author_type = cx.required(obj, "authorType");
        let is_public_author = cx.required(obj, "isPublicAuthor");
        let author_slug = cx.optional(obj, "authorSlug");
        let show_contribution_count = cx.optional(obj, "showContributionCount");
        let instagram = cx.optional_nullable(obj, "instagram");
        let facebook = cx.optional_nullable(obj, "facebook");
        let order_weight = cx.optional(obj, "orderWeight");
        let published_at = cx.optional_nullable(obj, "publishedAt");
        Some(Self {
            id: id?,
            document_id: document_id?,
            display_name: display_name?,
            position: position?,
            bio: bio?,
            profile_photo: profile_photo?,
            author_type: author_type?,
            is_public_author: is_public_author?,
            author_slug: author_slug?,
            show_contribution_count: show_contribution_count?.unwrap_or(false),
            social_links: SocialLinks {
                instagram: instagram?,
                facebook: facebook?,
            },
            order_weight: order_weight?.unwrap_or(0),
            published_at: published_at?,
        })
    }
}

impl Entity for AuthorProfile {
    const NAME: &'static str = "author profile";
}
