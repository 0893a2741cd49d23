use serde::{Deserialize, Serialize};

/// `{ "count": .., "results": [..] }` envelope used by bulk endpoints.
///
/// `count` is whatever upstream reports and is not reconciled with
/// `results.len()`. Upstream paging links are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Collection<T> {
    /// Convert every result, preserving order and the upstream `count`.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Collection<U> {
        Collection {
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
