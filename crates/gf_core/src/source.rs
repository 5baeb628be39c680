use async_trait::async_trait;
use crate::outcome::FetchOutcome;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Fetches and parses the articles behind a request URL.
    /// Never fails; problems are reported through the outcome.
    async fn fetch(&self, request_url: &str) -> FetchOutcome;
}
