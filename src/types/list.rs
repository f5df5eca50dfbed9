use serde::{Deserialize, Serialize};

/// One page of a Stripe list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    #[serde(default = "list_object")]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

fn list_object() -> String {
    "list".to_owned()
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            object: list_object(),
            data: Vec::new(),
            has_more: false,
            url: String::new(),
            total_count: None,
        }
    }
}

impl<T> List<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cursor for the next page, the ID of the last item when more remain.
    pub fn next_cursor(&self) -> Option<&str>
    where
        T: super::Object,
    {
        if !self.has_more {
            return None;
        }
        self.data.last().map(|item| item.id())
    }
}

fn search_result_object() -> String {
    "search_result".to_owned()
}

/// One page of a `/search` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    #[serde(default = "search_result_object")]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        SearchResult {
            object: search_result_object(),
            data: Vec::new(),
            has_more: false,
            next_page: None,
            url: String::new(),
            total_count: None,
        }
    }
}

/// Cursor parameters shared by every list endpoint.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Cursor parameters for `/search` endpoints.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}

/// `created` filter: an exact unix timestamp or a range.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CreatedFilter {
    Exact(i64),
    Range(RangeQuery),
}

impl From<i64> for CreatedFilter {
    fn from(timestamp: i64) -> Self {
        CreatedFilter::Exact(timestamp)
    }
}

impl From<RangeQuery> for CreatedFilter {
    fn from(range: RangeQuery) -> Self {
        CreatedFilter::Range(range)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_object_matches_the_default() {
        let page: SearchResult<String> =
            serde_json::from_str(r#"{"data":["a"],"has_more":false}"#).unwrap();
        assert_eq!(page.object, "search_result");
        assert_eq!(SearchResult::<String>::default().object, page.object);

        let list: List<String> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(list.object, List::<String>::default().object);
    }
}
