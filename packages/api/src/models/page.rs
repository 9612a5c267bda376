//! Paging, envelopes and list queries.
//!
//! List endpoints answer `{"result": {"content": [...], "total_pages": N, ...}}`.
//! Single-resource endpoints answer either the bare object or
//! `{"detail": "...", "result": {...}}`; [`MaybeEnveloped`] accepts both.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_records: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            page_number: None,
            page_size: None,
            total_records: None,
        }
    }
}

/// Response body that may or may not be wrapped in `{"result": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeEnveloped<T> {
    Wrapped { result: T },
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Wrapped { result } => result,
            MaybeEnveloped::Bare(inner) => inner,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// `page`, `limit`, `sort_by`, `order` query parameters. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort_by: "created_at".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl ListQuery {
    pub fn new(limit: u32, sort_by: &str) -> Self {
        Self {
            limit: limit.max(1),
            sort_by: sort_by.to_string(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// `?page=1&limit=20&sort_by=created_at&order=desc`
    pub fn to_query_string(&self) -> String {
        let sort_by: String = self
            .sort_by
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        format!(
            "?page={}&limit={}&sort_by={}&order={}",
            self.page,
            self.limit,
            sort_by,
            self.order.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_bare() {
        let wrapped: MaybeEnveloped<Page<u32>> =
            serde_json::from_str(r#"{"result":{"content":[1,2],"total_pages":3}}"#).unwrap();
        let page = wrapped.into_inner();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_pages, 3);

        let bare: MaybeEnveloped<Page<u32>> =
            serde_json::from_str(r#"{"content":[],"total_pages":0}"#).unwrap();
        assert!(bare.into_inner().content.is_empty());
    }

    #[test]
    fn test_query_string() {
        let q = ListQuery::new(12, "created_at").with_page(3);
        assert_eq!(q.to_query_string(), "?page=3&limit=12&sort_by=created_at&order=desc");

        let q = ListQuery {
            order: SortOrder::Asc,
            ..ListQuery::new(0, "price; drop").with_page(0)
        };
        assert_eq!(q.to_query_string(), "?page=1&limit=1&sort_by=pricedrop&order=asc");
    }
}
