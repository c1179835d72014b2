//! Compact listing cards printed with `--summary`.

use serde::Serialize;

use rawav_content::LandingContent;
use rawav_core::byline::format_byline;
use rawav_core::media::{ImageSize, MediaResolver};
use rawav_core::models::{Article, AuthorProfile, Gallery, ImageAsset, Report};
use rawav_core::rich_text::{excerpt, plain_text};
use rawav_core::types::PublishDate;

const EXCERPT_CHARS: usize = 160;
const BIO_EXCERPT_CHARS: usize = 120;

/// Listing cards use the `small` variant or the next one up.
const CARD_IMAGE_WIDTH: u32 = ImageSize::Small.breakpoint();

#[derive(Debug, Serialize)]
pub struct Card {
    pub title: String,
    pub slug: String,
    pub date: PublishDate,
    pub byline: String,
    /// Absolute URL; empty when the entry has no image.
    pub image: String,
    pub excerpt: String,
}

#[derive(Debug, Serialize)]
pub struct LandingCards {
    pub articles: Vec<Card>,
    pub reports: Vec<Card>,
    pub galleries: Vec<Card>,
}

#[derive(Debug, Serialize)]
pub struct AuthorCard {
    pub name: String,
    pub position: String,
    #[serde(rename = "type")]
    pub author_type: &'static str,
    pub photo: String,
    pub bio: String,
}

fn image_url(media: &MediaResolver, image: Option<&ImageAsset>) -> String {
    media.resolve_opt(image.map(|i| i.best_for_width(CARD_IMAGE_WIDTH)))
}

pub fn article(media: &MediaResolver, a: &Article) -> Card {
    Card {
        title: a.title.clone(),
        slug: a.slug.clone(),
        date: a.date,
        byline: format_byline(&a.authors),
        image: image_url(media, a.featured_image.as_ref()),
        excerpt: excerpt(&plain_text(&a.content), EXCERPT_CHARS),
    }
}

pub fn report(media: &MediaResolver, r: &Report) -> Card {
    Card {
        title: r.title.clone(),
        slug: r.slug.clone(),
        date: r.date,
        byline: format_byline(&r.authors),
        image: image_url(media, r.main_image.as_ref().or(r.images.first())),
        excerpt: excerpt(&plain_text(&r.content), EXCERPT_CHARS),
    }
}

pub fn gallery(media: &MediaResolver, g: &Gallery) -> Card {
    Card {
        title: g.title.clone(),
        slug: g.slug.clone(),
        date: g.date,
        byline: format_byline(&g.authors),
        image: image_url(media, g.cover()),
        excerpt: excerpt(&g.description, EXCERPT_CHARS),
    }
}

pub fn author(media: &MediaResolver, p: &AuthorProfile) -> AuthorCard {
    AuthorCard {
        name: p.display_name.clone(),
        position: p.position.clone(),
        author_type: p.author_type.as_str(),
        photo: image_url(media, p.profile_photo.as_ref()),
        bio: p
            .bio
            .as_ref()
            .map(|b| b.excerpt(BIO_EXCERPT_CHARS))
            .unwrap_or_default(),
    }
}

pub fn landing(media: &MediaResolver, l: &LandingContent) -> LandingCards {
    LandingCards {
        articles: l.articles.items.iter().map(|a| article(media, a)).collect(),
        reports: l.reports.items.iter().map(|r| report(media, r)).collect(),
        galleries: l.galleries.items.iter().map(|g| gallery(media, g)).collect(),
    }
}
