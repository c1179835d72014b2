//! Typed content accessors.
//!
//! Each accessor builds its endpoint, fetches through [`CmsClient`], and
//! validates the body against the content kind's schema. Nothing is cached;
//! every call goes to the CMS.
//!
//! Preconditions on the backend: list and lookup endpoints are expected to
//! return published entries only. The CMS does this by default for its
//! public REST API; a different backend must apply the same filter.

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use rawav_core::contact::ContactMessage;
use rawav_core::models::{
    validate_first, validate_page, Article, AuthorProfile, Gallery, Page, Report,
};
use rawav_core::schema::Entity;
use rawav_core::types::EntryId;

use crate::client::{CmsClient, RequestOptions};
use crate::config::CmsConfig;
use crate::error::{ContentError, ContentResult};
use crate::query::{list_endpoint, lookup_endpoint, EndpointBuilder, MAX_PAGE_SIZE};

const ARTICLES: &str = "articles";
const REPORTS: &str = "reports";
const GALLERIES: &str = "galleries";
const AUTHOR_PROFILES: &str = "author-profiles";
const CONTACT_MESSAGES: &str = "contact-messages";

/// The three listings shown on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub articles: Page<Article>,
    pub reports: Page<Report>,
    pub galleries: Page<Gallery>,
}

/// Typed accessors over one content host.
#[derive(Debug, Clone)]
pub struct ContentApi {
    client: CmsClient,
}

impl ContentApi {
    pub fn new(config: CmsConfig) -> ContentResult<Self> {
        Ok(Self {
            client: CmsClient::new(config)?,
        })
    }

    pub fn from_client(client: CmsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CmsClient {
        &self.client
    }

    // ---- articles ----

    /// One page of published articles, newest first.
    pub async fn list_articles(&self, page: u32, page_size: u32) -> ContentResult<Page<Article>> {
        self.list(ARTICLES, page, page_size).await
    }

    pub async fn get_article_by_slug(&self, slug: &str) -> ContentResult<Article> {
        self.lookup(ARTICLES, "Article", "Slug", slug).await
    }

    // ---- reports ----

    /// One page of published reports, newest first.
    pub async fn list_reports(&self, page: u32, page_size: u32) -> ContentResult<Page<Report>> {
        self.list(REPORTS, page, page_size).await
    }

    pub async fn get_report_by_slug(&self, slug: &str) -> ContentResult<Report> {
        self.lookup(REPORTS, "Report", "Slug", slug).await
    }

    // ---- galleries ----

    /// One page of published galleries, newest first.
    pub async fn list_galleries(&self, page: u32, page_size: u32) -> ContentResult<Page<Gallery>> {
        self.list(GALLERIES, page, page_size).await
    }

    pub async fn get_gallery_by_slug(&self, slug: &str) -> ContentResult<Gallery> {
        self.lookup(GALLERIES, "Gallery", "slug", slug).await
    }

    pub async fn get_gallery_by_id(&self, id: EntryId) -> ContentResult<Gallery> {
        self.lookup(GALLERIES, "Gallery", "id", id).await
    }

    // ---- authors ----

    /// Every public author profile, ordered by weight then name.
    ///
    /// Walks all pages of the collection. Profiles not flagged public are
    /// dropped here even if the backend returned them.
    pub async fn list_public_author_profiles(&self) -> ContentResult<Vec<AuthorProfile>> {
        let mut profiles = Vec::new();
        let mut page = 1;

        loop {
            let endpoint = EndpointBuilder::new(AUTHOR_PROFILES)
                .filter_eq("isPublicAuthor", true)
                .sort("orderWeight:asc")
                .paginate(page, MAX_PAGE_SIZE)
                .populate_all()
                .build();
            let raw: Value = self
                .client
                .fetch_api(&endpoint, RequestOptions::default())
                .await?;
            let batch = validate_page::<AuthorProfile>(&raw)?;
            let done = batch.items.is_empty() || page >= batch.pagination.page_count;
            profiles.extend(batch.items);
            if done {
                break;
            }
            page += 1;
        }

        let fetched = profiles.len();
        profiles.retain(|p| p.is_public_author);
        if profiles.len() != fetched {
            tracing::warn!(
                dropped = fetched - profiles.len(),
                "Backend returned non-public author profiles",
            );
        }

        profiles.sort_by(|a, b| {
            a.order_weight
                .cmp(&b.order_weight)
                .then_with(|| a.display_name.cmp(&b.display_name))
        });

        tracing::debug!(count = profiles.len(), pages = page, "Fetched author profiles");
        Ok(profiles)
    }

    // ---- landing page ----

    /// Latest articles, reports, and galleries, fetched concurrently.
    pub async fn fetch_landing(&self, page_size: u32) -> ContentResult<LandingContent> {
        let (articles, reports, galleries) = tokio::try_join!(
            self.list_articles(1, page_size),
            self.list_reports(1, page_size),
            self.list_galleries(1, page_size),
        )?;
        Ok(LandingContent {
            articles,
            reports,
            galleries,
        })
    }

    // ---- contact ----

    /// Validate and submit a contact form message.
    ///
    /// Fields are trimmed before validation; nothing is sent when
    /// validation fails.
    pub async fn submit_contact_message(&self, message: &ContactMessage) -> ContentResult<()> {
        let message = message.trimmed();
        message.validate()?;

        let _: Value = self
            .client
            .fetch_api(CONTACT_MESSAGES, RequestOptions::post(message.to_payload()))
            .await?;

        tracing::info!(subject = %message.subject, "Contact message submitted");
        Ok(())
    }

    // ---- private helpers ----

    async fn list<T: Entity>(
        &self,
        resource: &'static str,
        page: u32,
        page_size: u32,
    ) -> ContentResult<Page<T>> {
        let endpoint = list_endpoint(resource, page, page_size);
        let raw: Value = self
            .client
            .fetch_api(&endpoint, RequestOptions::default())
            .await?;

        let result = validate_page::<T>(&raw).inspect_err(|e| {
            tracing::warn!(resource, error = %e, "List response failed validation");
        })?;

        if !result.pagination.is_consistent() {
            tracing::warn!(
                resource,
                page_count = result.pagination.page_count,
                total = result.pagination.total,
                page_size = result.pagination.page_size,
                "Pagination block is inconsistent",
            );
        }

        tracing::debug!(
            resource,
            page = result.pagination.page,
            count = result.items.len(),
            total = result.pagination.total,
            "Fetched list",
        );
        Ok(result)
    }

    async fn lookup<T: Entity>(
        &self,
        resource: &'static str,
        label: &'static str,
        field: &str,
        value: impl ToString,
    ) -> ContentResult<T> {
        let value = value.to_string();
        let endpoint = lookup_endpoint(resource, field, &value);
        let raw: Value = self
            .client
            .fetch_api(&endpoint, RequestOptions::default())
            .await?;

        match validate_first::<T>(&raw) {
            Ok(Some(item)) => Ok(item),
            Ok(None) => {
                tracing::debug!(resource, field, value = %value, "Lookup matched nothing");
                Err(ContentError::NotFound {
                    resource: label,
                    key: format!("{field} = {value}"),
                })
            }
            Err(e) => {
                tracing::warn!(resource, field, value = %value, error = %e, "Lookup response failed validation");
                Err(e.into())
            }
        }
    }
}
