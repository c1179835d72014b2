//! Endpoint strings for the CMS REST API.
//!
//! The CMS uses bracketed query keys (`pagination[page]`,
//! `filters[Slug][$eq]`). Keys are written literally; filter values are
//! percent-encoded.

/// Largest page size the CMS will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default sort for dated content: newest first.
pub const SORT_BY_DATE_DESC: &str = "Date:desc";

/// Builder for an API-relative endpoint such as
/// `articles?pagination[page]=1&pagination[pageSize]=10&sort=Date:desc&populate=*`.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    resource: String,
    params: Vec<(String, String)>,
}

impl EndpointBuilder {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            params: Vec::new(),
        }
    }

    /// Request one page. `page` is clamped to at least 1 and `page_size` to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        let (page, page_size) = clamp_page(page, page_size);
        self.params
            .push(("pagination[page]".into(), page.to_string()));
        self.params
            .push(("pagination[pageSize]".into(), page_size.to_string()));
        self
    }

    pub fn sort(mut self, order: &str) -> Self {
        self.params.push(("sort".into(), order.to_string()));
        self
    }

    /// Exact-match filter on `field`.
    pub fn filter_eq(mut self, field: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.params.push((
            format!("filters[{field}][$eq]"),
            urlencoding::encode(&value).into_owned(),
        ));
        self
    }

    /// Populate every first-level relation.
    pub fn populate_all(mut self) -> Self {
        self.params.push(("populate".into(), "*".into()));
        self
    }

    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.resource.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.resource)
    }
}

/// Clamp a requested page into the range the CMS serves.
pub fn clamp_page(page: u32, page_size: u32) -> (u32, u32) {
    (page.max(1), page_size.clamp(1, MAX_PAGE_SIZE))
}

/// Endpoint for one page of a dated collection, newest first.
pub fn list_endpoint(resource: &str, page: u32, page_size: u32) -> String {
    EndpointBuilder::new(resource)
        .paginate(page, page_size)
        .sort(SORT_BY_DATE_DESC)
        .populate_all()
        .build()
}

/// Endpoint for an exact-match lookup on `field`.
pub fn lookup_endpoint(resource: &str, field: &str, value: impl ToString) -> String {
    EndpointBuilder::new(resource)
        .filter_eq(field, value)
        .populate_all()
        .build()
}
