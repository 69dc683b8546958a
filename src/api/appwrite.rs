//! Document database (Appwrite REST v1) request builders and decoders.
//!
//! Only the search-count collection is used. Each document holds one search
//! term with its hit count and the top movie it returned first.

use crate::api::http::{HttpRequest, HttpResponse};
use crate::domain::trending::{TrendingEntry, TRENDING_LIMIT};
use crate::domain::Result;
use serde::Deserialize;
use serde_json::{json, Value};

/// Default database endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://syd.cloud.appwrite.io/v1";

/// Attribute holding the search term.
const SEARCH_TERM: &str = "searchTerm";

/// Attribute holding the hit count.
const COUNT: &str = "count";

/// A list query, encoded as the JSON form the REST API accepts in `queries[]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Equal { attribute: String, value: Value },
    OrderDesc { attribute: String },
    Limit(usize),
}

impl Query {
    #[must_use]
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::Equal {
            attribute: attribute.to_string(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn order_desc(attribute: &str) -> Self {
        Self::OrderDesc {
            attribute: attribute.to_string(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Equal { attribute, value } => {
                json!({"method": "equal", "attribute": attribute, "values": [value]})
            }
            Self::OrderDesc { attribute } => json!({"method": "orderDesc", "attribute": attribute}),
            Self::Limit(limit) => json!({"method": "limit", "values": [limit]}),
        }
    }
}

/// Response of a document list call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub documents: Vec<TrendingEntry>,
}

/// Builds requests against the search-count collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCountStore {
    endpoint: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    api_key: Option<String>,
}

impl SearchCountStore {
    #[must_use]
    pub fn new(
        endpoint: &str,
        project_id: &str,
        database_id: &str,
        collection_id: &str,
        api_key: Option<&str>,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            database_id: database_id.to_string(),
            collection_id: collection_id.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn with_headers(&self, request: HttpRequest) -> HttpRequest {
        let request = request
            .header("X-Appwrite-Project", self.project_id.as_str())
            .header("Content-Type", "application/json");
        match &self.api_key {
            Some(key) => request.header("X-Appwrite-Key", key.as_str()),
            None => request,
        }
    }

    /// Lists documents matching `queries`.
    #[must_use]
    pub fn list_request(&self, queries: &[Query]) -> HttpRequest {
        let params: Vec<String> = queries
            .iter()
            .enumerate()
            .map(|(index, query)| {
                format!(
                    "queries%5B{index}%5D={}",
                    urlencoding::encode(&query.to_json().to_string())
                )
            })
            .collect();

        let url = if params.is_empty() {
            self.documents_url()
        } else {
            format!("{}?{}", self.documents_url(), params.join("&"))
        };
        self.with_headers(HttpRequest::get(url))
    }

    /// Looks up the document stored for a search term.
    #[must_use]
    pub fn find_term_request(&self, term: &str) -> HttpRequest {
        self.list_request(&[Query::equal(SEARCH_TERM, term)])
    }

    /// Fetches the most searched terms, highest count first.
    #[must_use]
    pub fn trending_request(&self) -> HttpRequest {
        self.list_request(&[Query::order_desc(COUNT), Query::Limit(TRENDING_LIMIT)])
    }

    /// Creates the first document for a term with a count of 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded.
    pub fn create_request(&self, term: &str, movie_id: u64, poster_url: &str) -> Result<HttpRequest> {
        let body = json!({
            "documentId": "unique()",
            "data": {
                SEARCH_TERM: term,
                COUNT: 1,
                "movie_id": movie_id,
                "poster_url": poster_url,
            },
        });
        self.with_headers(HttpRequest::post(self.documents_url())).json_body(&body)
    }

    /// Writes back an existing document with its count incremented by one.
    ///
    /// Uses the document upsert route (`PUT`) with the full attribute set, so
    /// the stored movie and poster are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded.
    pub fn increment_request(&self, entry: &TrendingEntry) -> Result<HttpRequest> {
        let body = json!({
            "data": {
                SEARCH_TERM: entry.search_term,
                COUNT: entry.count + 1,
                "movie_id": entry.movie_id,
                "poster_url": entry.poster_url,
            },
        });
        let url = format!(
            "{}/{}",
            self.documents_url(),
            urlencoding::encode(&entry.document_id)
        );
        self.with_headers(HttpRequest::put(url)).json_body(&body)
    }
}

/// Decodes a document list response.
///
/// # Errors
///
/// Fails on non-2xx statuses and undecodable bodies.
pub fn decode_documents(response: &HttpResponse, context: &str) -> Result<DocumentList> {
    response.json(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::HttpMethod;

    fn store() -> SearchCountStore {
        SearchCountStore::new(DEFAULT_ENDPOINT, "proj", "db", "metrics", None)
    }

    fn decode_query_param(url: &str, index: usize) -> Value {
        let key = format!("queries%5B{index}%5D=");
        let start = url.find(&key).unwrap() + key.len();
        let rest = &url[start..];
        let raw = rest.split('&').next().unwrap();
        serde_json::from_str(&urlencoding::decode(raw).unwrap()).unwrap()
    }

    #[test]
    fn trending_orders_by_count_and_limits_to_five() {
        let request = store().trending_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request
            .url
            .starts_with("https://syd.cloud.appwrite.io/v1/databases/db/collections/metrics/documents?"));
        assert_eq!(
            decode_query_param(&request.url, 0),
            json!({"method": "orderDesc", "attribute": "count"})
        );
        assert_eq!(decode_query_param(&request.url, 1), json!({"method": "limit", "values": [5]}));
    }

    #[test]
    fn find_term_filters_on_search_term() {
        let request = store().find_term_request("star wars");
        assert_eq!(
            decode_query_param(&request.url, 0),
            json!({"method": "equal", "attribute": "searchTerm", "values": ["star wars"]})
        );
        assert_eq!(request.headers["X-Appwrite-Project"], "proj");
        assert!(!request.headers.contains_key("X-Appwrite-Key"));
    }

    #[test]
    fn api_key_header_is_optional() {
        let store = SearchCountStore::new(DEFAULT_ENDPOINT, "p", "d", "c", Some("k"));
        assert_eq!(store.trending_request().headers["X-Appwrite-Key"], "k");
    }

    #[test]
    fn create_starts_count_at_one() {
        let request = store()
            .create_request("batman", 268, "https://image.tmdb.org/t/p/w500/b.jpg")
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["documentId"], "unique()");
        assert_eq!(body["data"]["searchTerm"], "batman");
        assert_eq!(body["data"]["count"], 1);
        assert_eq!(body["data"]["movie_id"], 268);
    }

    #[test]
    fn increment_puts_count_plus_one_to_the_document() {
        let entry = TrendingEntry {
            document_id: "doc1".to_string(),
            search_term: "batman".to_string(),
            movie_id: Some(268),
            poster_url: Some("/No-Poster.png".to_string()),
            count: 4,
        };
        let request = store().increment_request(&entry).unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert!(request.url.ends_with("/documents/doc1"));
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["data"]["count"], 5);
        assert_eq!(body["data"]["poster_url"], "/No-Poster.png");
    }

    #[test]
    fn document_list_decodes() {
        let body = br#"{"total": 1, "documents": [{"$id": "a", "searchTerm": "dune", "count": 2}]}"#;
        let list = decode_documents(&HttpResponse::new(200, body.to_vec()), "trending").unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.documents[0].search_term, "dune");
    }
}
