//! Lenient query-string access.
//!
//! Listing endpoints never reject a request because of its query string: an
//! unparseable string reads as empty, and each lookup falls back to a default.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;
use std::str::FromStr;

/// Raw query pairs in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value for `key`. An empty value counts as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// First value for `key` parsed as `T`, or `None` when missing or unparseable.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> QueryParams {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_first_occurrence_wins() {
        let params = extract("/catalog?category=SHOES&category=CLOTHING").await;
        assert_eq!(params.get("category"), Some("SHOES"));
    }

    #[tokio::test]
    async fn test_empty_value_is_absent() {
        let params = extract("/catalog?category=&limit=5").await;
        assert_eq!(params.get("category"), None);
        assert_eq!(params.parse::<i64>("limit"), Some(5));
    }

    #[tokio::test]
    async fn test_missing_query_string() {
        let params = extract("/catalog").await;
        assert_eq!(params, QueryParams::default());
        assert_eq!(params.get("offset"), None);
    }

    #[tokio::test]
    async fn test_percent_decoding() {
        let params = extract("/catalog?category=HOME%20GOODS").await;
        assert_eq!(params.get("category"), Some("HOME GOODS"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let params = QueryParams::new(vec![("limit".into(), "ten".into())]);
        assert_eq!(params.parse::<i64>("limit"), None);
    }
}
