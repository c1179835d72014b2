//! Shared helpers for content API integration tests.
//!
//! [`FakeCms`] serves an in-memory set of collections over HTTP with the
//! same query conventions as the real CMS (bracketed filters, `sort`,
//! `pagination[page]`/`pagination[pageSize]`), on an ephemeral port.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use rawav_content::{CmsConfig, ContentApi};

/// Default page size the CMS applies when none is requested.
const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Clone, Default)]
pub struct FakeCms {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    requests: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<Value>>>,
}

impl FakeCms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, resource: &str, items: Vec<Value>) -> Self {
        self.collections
            .lock()
            .unwrap()
            .insert(resource.to_string(), items);
        self
    }

    /// Every GET served so far, as `resource?raw-query`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Bodies of every POST to `contact-messages`.
    pub fn submissions(&self) -> Vec<Value> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/contact-messages", post(create_contact_message))
            .route("/api/{resource}", get(list_collection))
            .with_state(self.clone())
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn serve(&self) -> String {
        serve(self.router()).await
    }
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL with nothing listening behind it.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn api(base_url: &str) -> ContentApi {
    ContentApi::new(CmsConfig::new(base_url)).unwrap()
}

/// CMS-style error envelope.
pub fn error_body(status: u16, name: &str, message: &str) -> Value {
    json!({
        "data": null,
        "error": { "status": status, "name": name, "message": message, "details": {} }
    })
}

async fn list_collection(
    State(cms): State<FakeCms>,
    Path(resource): Path<String>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    cms.requests
        .lock()
        .unwrap()
        .push(format!("{resource}?{}", raw.unwrap_or_default()));

    let Some(mut items) = cms.collections.lock().unwrap().get(&resource).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            Json(error_body(404, "NotFoundError", "Not Found")),
        );
    };

    for (key, expected) in &params {
        if let Some(field) = filter_field(key) {
            items.retain(|item| matches_filter(&item[field], expected));
        }
    }

    if let Some((field, dir)) = params.get("sort").and_then(|s| s.split_once(':')) {
        items.sort_by(|a, b| {
            let ord = compare(&a[field], &b[field]);
            if dir == "desc" {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    let page: usize = params
        .get("pagination[page]")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let page_size: usize = params
        .get("pagination[pageSize]")
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let total = items.len();
    let page_count = total.div_ceil(page_size);
    let data: Vec<Value> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "data": data,
            "meta": {
                "pagination": {
                    "page": page,
                    "pageSize": page_size,
                    "pageCount": page_count,
                    "total": total,
                }
            }
        })),
    )
}

async fn create_contact_message(
    State(cms): State<FakeCms>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut submissions = cms.submissions.lock().unwrap();
    submissions.push(body.clone());
    let mut data = body["data"].clone();
    data["id"] = json!(submissions.len());
    (StatusCode::OK, Json(json!({ "data": data, "meta": {} })))
}

/// `filters[Slug][$eq]` -> `Slug`.
fn filter_field(key: &str) -> Option<&str> {
    key.strip_prefix("filters[")?.split(']').next()
}

fn matches_filter(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        Value::Bool(b) => b.to_string() == expected,
        _ => false,
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn image(id: i64) -> Value {
    json!({
        "id": id,
        "documentId": format!("img{id}"),
        "name": format!("photo-{id}.jpg"),
        "alternativeText": null,
        "caption": null,
        "width": 1600,
        "height": 1067,
        "formats": {
            "thumbnail": {
                "name": format!("thumbnail_photo-{id}.jpg"),
                "hash": format!("thumbnail_photo_{id}"),
                "ext": ".jpg",
                "mime": "image/jpeg",
                "path": null,
                "width": 234,
                "height": 156,
                "size": 8.4,
                "sizeInBytes": 8400,
                "url": format!("/uploads/thumbnail_photo_{id}.jpg")
            },
            "large": {
                "name": format!("large_photo-{id}.jpg"),
                "hash": format!("large_photo_{id}"),
                "ext": ".jpg",
                "mime": "image/jpeg",
                "path": null,
                "width": 1000,
                "height": 667,
                "size": 120.5,
                "sizeInBytes": 120500,
                "url": format!("/uploads/large_photo_{id}.jpg")
            }
        },
        "hash": format!("photo_{id}"),
        "ext": ".jpg",
        "mime": "image/jpeg",
        "size": 310.2,
        "url": format!("/uploads/photo_{id}.jpg"),
        "previewUrl": null,
        "provider": "local",
        "provider_metadata": null,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "publishedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn author(id: i64, name: &str, author_type: &str, public: bool, weight: i64) -> Value {
    json!({
        "id": id,
        "documentId": format!("author{id}"),
        "displayName": name,
        "position": "Contributor",
        "bio": format!("{name} writes about aviation."),
        "authorType": author_type,
        "isPublicAuthor": public,
        "authorSlug": name.to_lowercase().replace(' ', "-"),
        "showContributionCount": true,
        "orderWeight": weight,
        "instagram": null,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "publishedAt": "2024-01-01T00:00:00.000Z"
    })
}

fn blocks(text: &str) -> Value {
    json!([{ "type": "paragraph", "children": [{ "type": "text", "text": text }] }])
}

/// Article `n`, dated 2024-01-`n`; higher `n` is more recent.
pub fn article(n: u32) -> Value {
    json!({
        "id": n,
        "documentId": format!("article{n}"),
        "Title": format!("Article {n}"),
        "Slug": format!("article-{n}"),
        "Content": blocks(&format!("Body of article {n}.")),
        "Date": format!("2024-01-{n:02}"),
        "authors": [author(1, "Alex Reid", "founder", true, 1)],
        "Featured_Image": image(i64::from(n) * 100),
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "publishedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn report(n: u32) -> Value {
    json!({
        "id": n,
        "documentId": format!("report{n}"),
        "Title": format!("Report {n}"),
        "Slug": format!("report-{n}"),
        "Date": format!("2024-02-{n:02}"),
        "Content": blocks(&format!("Report {n} text.")),
        "MainImage": image(i64::from(n) * 10),
        "Images": [image(i64::from(n) * 10 + 1), image(i64::from(n) * 10 + 2)],
        "createdAt": "2024-02-01T00:00:00.000Z",
        "updatedAt": "2024-02-01T00:00:00.000Z",
        "publishedAt": "2024-02-01T00:00:00.000Z"
    })
}

pub fn gallery(n: u32) -> Value {
    json!({
        "id": n,
        "documentId": format!("gallery{n}"),
        "Title": format!("Gallery {n}"),
        "slug": format!("gallery-{n}"),
        "Date": format!("2024-03-{n:02}"),
        "Description": format!("Photos from event {n}."),
        "Images": [image(i64::from(n) * 1000), image(i64::from(n) * 1000 + 1)],
        "createdAt": "2024-03-01T00:00:00.000Z",
        "updatedAt": "2024-03-01T00:00:00.000Z",
        "publishedAt": "2024-03-01T00:00:00.000Z"
    })
}

/// `count` items built by `make`, numbered from 1.
pub fn many(count: u32, make: fn(u32) -> Value) -> Vec<Value> {
    (1..=count).map(make).collect()
}
