//! List envelopes and pagination metadata.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::{Checker, Entity, Schema};

/// Pagination block returned with every list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    /// Number of pages needed for `total` items at `page_size` per page.
    pub fn expected_page_count(total: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = total.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether `page_count` agrees with `total` and `page_size`.
    pub fn is_consistent(&self) -> bool {
        self.page_count == Self::expected_page_count(self.total, self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Schema for Pagination {
    const EXPECTED: &'static str = "pagination";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let page = cx.required(obj, "page");
        let page_size = cx.required(obj, "pageSize");
        let page_count = cx.required(obj, "pageCount");
        let total = cx.required(obj, "total");
        Some(Self {
            page: page?,
            page_size: page_size?,
            page_count: page_count?,
            total: total?,
        })
    }
}

/// One page of validated items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ListMeta {
    pagination: Pagination,
}

impl Schema for ListMeta {
    const EXPECTED: &'static str = "meta";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let obj = cx.object(value)?;
        let pagination = cx.required(obj, "pagination");
        Some(Self {
            pagination: pagination?,
        })
    }
}

/// Validate a `{data: [...], meta: {pagination}}` list response.
///
/// Violations inside items are reported with a `data[i].` prefix.
pub fn validate_page<T: Entity>(value: &Value) -> Result<Page<T>, ValidationError> {
    let mut cx = Checker::new();
    let out = (|| {
        let obj = cx.object(value)?;
        let items = cx.required::<Vec<T>>(obj, "data");
        let meta = cx.required::<ListMeta>(obj, "meta");
        Some(Page {
            items: items?,
            pagination: meta?.pagination,
        })
    })();
    cx.finish(T::NAME, out)
}

/// Validate the first element of a lookup response's `data` array.
///
/// Returns `Ok(None)` for an empty array. The element is validated on its
/// own, so violation paths are relative to the item (`Title`, not
/// `data[0].Title`).
pub fn validate_first<T: Entity>(value: &Value) -> Result<Option<T>, ValidationError> {
    let mut cx = Checker::new();
    let data = cx
        .object(value)
        .and_then(|obj| cx.at_key("data", |cx| match obj.get("data") {
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                cx.mismatch("array", other);
                None
            }
            None => {
                cx.violation("array", "missing");
                None
            }
        }));
    let Some(first) = cx.finish(T::NAME, data).map(|d| d.first())? else {
        return Ok(None);
    };
    crate::schema::validate(first).map(Some)
}
