use serde::{Deserialize, Serialize};

/// Offset/limit window over an ordered listing
///
/// Deserializes straight from `?skip=..&limit=..`; missing fields fall
/// back to `skip = 0` and `limit = 100`. Both are unsigned so negative
/// values are rejected at the extractor; values past `i64::MAX` are
/// clamped when bound to SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// SQL `OFFSET` value
    pub fn offset(&self) -> i64 {
        clamp_to_sql(self.skip)
    }

    /// SQL `LIMIT` value
    pub fn limit(&self) -> i64 {
        clamp_to_sql(self.limit)
    }
}

fn clamp_to_sql(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of a listing plus the total number of rows
///
/// `count` is the size of the whole collection, independent of the
/// window that produced `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, count: i64) -> Self {
        Self { data, count }
    }

    /// Converts every item, keeping the total count
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}
