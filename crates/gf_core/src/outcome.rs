use crate::types::Article;

/// Result of one fetch-parse run.
///
/// Every failure is absorbed here instead of being returned as an error, so
/// callers that only care about the list can use [`FetchOutcome::into_articles`]
/// while logs and tests can still tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Vec<Article>),
    /// The server answered 200 with an empty body.
    EmptyInput,
    InvalidUrl(String),
    NetworkError(String),
    HttpStatus(u16),
    /// Parsing stopped at the first structural error; `partial` holds the
    /// entries read before it.
    ParseError { partial: Vec<Article>, reason: String },
}

impl FetchOutcome {
    /// Articles as the list view sees them. Failures become an empty or
    /// partial list.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Success(articles) => articles,
            FetchOutcome::ParseError { partial, .. } => partial,
            _ => Vec::new(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        match self {
            FetchOutcome::Success(articles) => articles,
            FetchOutcome::ParseError { partial, .. } => partial,
            _ => &[],
        }
    }

    /// True when no body was parsed at all (the "absent" result).
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            FetchOutcome::EmptyInput
                | FetchOutcome::InvalidUrl(_)
                | FetchOutcome::NetworkError(_)
                | FetchOutcome::HttpStatus(_)
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Diagnostic line for logs, `None` on success.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::EmptyInput => Some("Empty response body".to_string()),
            FetchOutcome::InvalidUrl(reason) => Some(format!("Problem building the URL: {}", reason)),
            FetchOutcome::NetworkError(reason) => Some(format!("Problem making the HTTP request: {}", reason)),
            FetchOutcome::HttpStatus(code) => Some(format!("Error response code: {}", code)),
            FetchOutcome::ParseError { reason, .. } => Some(format!("Problem parsing JSON results: {}", reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article::new(title, None, "World", "2020-01-01T00:00:00Z", "http://x/1")
    }

    #[test]
    fn test_failures_collapse_to_empty() {
        assert!(FetchOutcome::HttpStatus(500).into_articles().is_empty());
        assert!(FetchOutcome::NetworkError("refused".into()).into_articles().is_empty());
        assert!(FetchOutcome::InvalidUrl("no scheme".into()).into_articles().is_empty());
        assert!(FetchOutcome::EmptyInput.into_articles().is_empty());
    }

    #[test]
    fn test_parse_error_keeps_partial() {
        let outcome = FetchOutcome::ParseError {
            partial: vec![article("T1")],
            reason: "No value for webUrl".into(),
        };
        assert!(!outcome.is_no_data());
        assert_eq!(outcome.articles().len(), 1);
        assert_eq!(
            outcome.diagnostic().as_deref(),
            Some("Problem parsing JSON results: No value for webUrl")
        );
        assert_eq!(outcome.into_articles()[0].title(), "T1");
    }

    #[test]
    fn test_success_has_no_diagnostic() {
        let outcome = FetchOutcome::Success(vec![article("T1"), article("T2")]);
        assert!(outcome.is_success());
        assert!(outcome.diagnostic().is_none());
        assert_eq!(outcome.into_articles().len(), 2);
    }
}
