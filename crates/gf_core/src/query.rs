use url::form_urlencoded;

pub const DEFAULT_ENDPOINT: &str = "http://content.guardianapis.com/search";

const SHOW_FIELDS: &str = "show-fields";
const PAGE_SIZE: &str = "page-size";
const KEYWORDS: &str = "q";
const API_KEY: &str = "api-key";

/// Extra result fields requested from the search API.
const BYLINE: &str = "byline";

/// Inputs for a content search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub endpoint: String,
    pub page_size: String,
    pub keywords: String,
    pub api_key: String,
}

impl SearchQuery {
    pub fn new(
        endpoint: impl Into<String>,
        page_size: impl Into<String>,
        keywords: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            page_size: page_size.into(),
            keywords: keywords.into(),
            api_key: api_key.into(),
        }
    }

    pub fn params(&self) -> [(&'static str, &str); 4] {
        [
            (SHOW_FIELDS, BYLINE),
            (PAGE_SIZE, &self.page_size),
            (KEYWORDS, &self.keywords),
            (API_KEY, &self.api_key),
        ]
    }

    /// Appends the encoded parameters to the endpoint. The endpoint itself is
    /// not validated here; a bad one fails when the request URL is parsed.
    pub fn build_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish();

        let separator = if self.endpoint.ends_with('?') || self.endpoint.ends_with('&') {
            ""
        } else if self.endpoint.contains('?') {
            "&"
        } else {
            "?"
        };

        format!("{}{}{}", self.endpoint, separator, query)
    }
}

pub fn build_url(endpoint: &str, page_size: &str, keywords: &str, api_key: &str) -> String {
    SearchQuery::new(endpoint, page_size, keywords, api_key).build_url()
}
