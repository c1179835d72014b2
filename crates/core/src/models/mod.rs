//! Typed content returned by the CMS.
//!
//! Every model implements [`Schema`](crate::schema::Schema) for structural
//! validation and serialises back to the CMS wire names, so validating a
//! serialised model yields the same model.

pub mod article;
pub mod author;
pub mod gallery;
pub mod image;
pub mod pagination;
pub mod report;

pub use article::Article;
pub use author::{AuthorProfile, AuthorType, SocialLinks};
pub use gallery::Gallery;
pub use image::{ImageAsset, ImageFormat, ImageFormats};
pub use pagination::{validate_first, validate_page, Page, Pagination};
pub use report::Report;

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::schema::validate;

    fn image(id: i64) -> Value {
        json!({
            "id": id,
            "documentId": format!("img{id}"),
            "name": format!("photo-{id}.jpg"),
            "alternativeText": "Typhoon on finals",
            "caption": null,
            "width": 800,
            "height": 533,
            "formats": {
                "thumbnail": {
                    "name": "thumbnail_photo.jpg",
                    "hash": "thumbnail_photo",
                    "ext": ".jpg",
                    "mime": "image/jpeg",
                    "path": null,
                    "width": 234,
                    "height": 156,
                    "size": 9.8,
                    "sizeInBytes": 9800,
                    "url": "/uploads/thumbnail_photo.jpg"
                }
            },
            "hash": "photo",
            "ext": ".jpg",
            "mime": "image/jpeg",
            "size": 88.1,
            "url": format!("/uploads/photo_{id}.jpg"),
            "previewUrl": null,
            "provider": "local",
            "provider_metadata": null,
            "createdAt": "2024-03-01T09:00:00.000Z",
            "updatedAt": "2024-03-01T09:00:00.000Z",
            "publishedAt": "2024-03-01T09:00:00.000Z"
        })
    }

    fn author() -> Value {
        json!({
            "id": 1,
            "documentId": "a1",
            "displayName": "Alex Reid",
            "position": "Founder & Editor",
            "bio": [{ "type": "paragraph", "children": [{ "type": "text", "text": "Ex-RAF engineer." }] }],
            "authorType": "founder",
            "isPublicAuthor": true,
            "authorSlug": "alex-reid",
            "showContributionCount": false,
            "orderWeight": 1,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "publishedAt": "2024-01-01T00:00:00.000Z"
        })
    }

    fn article() -> Value {
        json!({
            "id": 12,
            "documentId": "art12",
            "Title": "Tempest demonstrator rolls out",
            "Slug": "tempest-demonstrator-rolls-out",
            "Content": [
                { "type": "heading", "level": 2, "children": [{ "type": "text", "text": "Rollout" }] },
                { "type": "paragraph", "children": [{ "type": "text", "text": "The demonstrator left the hangar." }] }
            ],
            "Date": "2024-07-19",
            "authors": [author()],
            "Featured_Image": image(4),
            "createdAt": "2024-07-19T10:00:00.000Z",
            "updatedAt": "2024-07-20T10:00:00.000Z",
            "publishedAt": "2024-07-19T12:00:00.000Z",
            "locale": "en"
        })
    }

    fn report() -> Value {
        json!({
            "id": 5,
            "documentId": "rep5",
            "Title": "RIAT 2024",
            "Slug": "riat-2024",
            "Date": "2024-07-21",
            "Content": [{ "type": "paragraph", "children": [{ "type": "text", "text": "Three days of flying." }] }],
            "MainImage": image(1),
            "Images": [image(2), image(3)],
            "createdAt": "2024-07-22T10:00:00.000Z",
            "updatedAt": "2024-07-22T10:00:00.000Z",
            "publishedAt": "2024-07-22T10:00:00.000Z"
        })
    }

    fn gallery() -> Value {
        json!({
            "id": 8,
            "documentId": "gal8",
            "Title": "Duxford Flying Legends",
            "slug": "duxford-flying-legends",
            "Date": "2024-07-13",
            "Description": "Warbirds over Cambridgeshire.",
            "authors": [author()],
            "Images": [image(10), image(11)],
            "createdAt": "2024-07-14T10:00:00.000Z",
            "updatedAt": "2024-07-14T10:00:00.000Z",
            "publishedAt": "2024-07-14T10:00:00.000Z"
        })
    }

    fn assert_idempotent<T>(raw: Value)
    where
        T: crate::schema::Entity + serde::Serialize + PartialEq + std::fmt::Debug,
    {
        let first: T = validate(&raw).unwrap();
        let second: T = validate(&serde_json::to_value(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn article_parses() {
        let a: Article = validate(&article()).unwrap();
        assert_eq!(a.title, "Tempest demonstrator rolls out");
        assert_eq!(a.content.len(), 2);
        assert_eq!(a.content[0].level, Some(2));
        assert_eq!(a.authors[0].author_type, AuthorType::Founder);
        assert_eq!(a.featured_image.as_ref().unwrap().id, 4);
        assert_eq!(a.date.to_string(), "2024-07-19");
    }

    #[test]
    fn article_missing_title_is_named() {
        let mut raw = article();
        raw.as_object_mut().unwrap().remove("Title");
        let err = validate::<Article>(&raw).unwrap_err();
        assert_eq!(err.entity, "article");
        assert_eq!(err.paths(), vec!["Title"]);
        assert_eq!(err.violations[0].expected, "string");
        assert_eq!(err.violations[0].actual, "missing");
    }

    #[test]
    fn article_reports_every_bad_field() {
        let mut raw = article();
        raw["Slug"] = json!(null);
        raw["Date"] = json!("yesterday");
        raw["authors"][0]["isPublicAuthor"] = json!("yes");
        let err = validate::<Article>(&raw).unwrap_err();
        assert_eq!(
            err.paths(),
            vec!["Slug", "Date", "authors[0].isPublicAuthor"]
        );
    }

    #[test]
    fn article_without_authors_or_image() {
        let mut raw = article();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("authors");
        obj.remove("Featured_Image");
        let a: Article = validate(&raw).unwrap();
        assert!(a.authors.is_empty());
        assert!(a.featured_image.is_none());
    }

    #[test]
    fn report_parses_supplementary_images_in_order() {
        let r: Report = validate(&report()).unwrap();
        let ids: Vec<i64> = r.images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(r.main_image.unwrap().id, 1);
        assert!(r.authors.is_empty());
    }

    #[test]
    fn gallery_requires_images() {
        let mut raw = gallery();
        raw.as_object_mut().unwrap().remove("Images");
        let err = validate::<Gallery>(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["Images"]);
    }

    #[test]
    fn gallery_uses_lowercase_slug() {
        let mut raw = gallery();
        let obj = raw.as_object_mut().unwrap();
        let slug = obj.remove("slug").unwrap();
        obj.insert("Slug".into(), slug);
        let err = validate::<Gallery>(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["slug"]);
    }

    #[test]
    fn validation_is_idempotent() {
        assert_idempotent::<Article>(article());
        assert_idempotent::<Report>(report());
        assert_idempotent::<Gallery>(gallery());
        assert_idempotent::<AuthorProfile>(author());
    }

    #[test]
    fn extra_fields_are_stripped() {
        let a: Article = validate(&article()).unwrap();
        let out = serde_json::to_value(&a).unwrap();
        assert!(out.get("locale").is_none());
        assert!(out["Featured_Image"].get("provider_metadata").is_none());
        assert!(out["Featured_Image"].get("createdAt").is_none());
    }

    #[test]
    fn list_envelope_parses_with_pagination() {
        let raw = json!({
            "data": [article(), article()],
            "meta": { "pagination": { "page": 1, "pageSize": 2, "pageCount": 4, "total": 7 } }
        });
        let page: Page<Article> = validate_page(&raw).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.pagination,
            Pagination {
                page: 1,
                page_size: 2,
                page_count: 4,
                total: 7
            }
        );
    }

    #[test]
    fn list_envelope_prefixes_item_paths() {
        let mut bad = article();
        bad.as_object_mut().unwrap().remove("Title");
        let raw = json!({
            "data": [article(), bad],
            "meta": { "pagination": { "page": 1, "pageSize": 2, "pageCount": 1, "total": 2 } }
        });
        let err = validate_page::<Article>(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["data[1].Title"]);
    }

    #[test]
    fn list_envelope_requires_pagination() {
        let raw = json!({ "data": [], "meta": {} });
        let err = validate_page::<Gallery>(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["meta.pagination"]);
    }

    #[test]
    fn first_of_empty_lookup_is_none() {
        let raw = json!({ "data": [], "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 0, "total": 0 } } });
        assert!(validate_first::<Report>(&raw).unwrap().is_none());
    }

    #[test]
    fn first_validates_item_with_relative_paths() {
        let mut bad = report();
        bad["Title"] = json!(12);
        let raw = json!({ "data": [bad] });
        let err = validate_first::<Report>(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["Title"]);
    }

    #[test]
    fn first_requires_data_array() {
        let err = validate_first::<Report>(&json!({ "data": {} })).unwrap_err();
        assert_eq!(err.paths(), vec!["data"]);
        assert_eq!(err.violations[0].actual, "object");
    }
}
