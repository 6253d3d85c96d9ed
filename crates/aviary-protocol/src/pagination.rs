//! Paginated list responses.

use serde::{Deserialize, Serialize};

use crate::value::null_to_default;

/// One page of a list endpoint.
///
/// An empty page is a valid success; the server may marshal an empty item
/// set as `null`, which decodes to an empty vector here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages implied by `total` at this page size.
    pub fn page_count(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        (self.total + self.page_size - 1) / self.page_size
    }
}
