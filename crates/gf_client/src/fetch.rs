use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use gf_core::{ArticleSource, Error, FeedConfig, FetchOutcome, Result};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::logging::Logger;
use crate::parse::extract_articles;

/// Runs the fetch-parse pipeline against the content search API.
///
/// Holds nothing but an immutable client, so one fetcher can serve any
/// number of concurrent loads.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
    connect_timeout: Duration,
    read_timeout: Duration,
    logger: Logger,
}

impl FeedFetcher {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            connect_timeout,
            read_timeout,
            logger: Logger::new().with_prefix("[guardian]"),
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Self::new(config.connect_timeout, config.read_timeout)
    }

    /// Every outcome other than success is logged with its diagnostic.
    pub async fn fetch(&self, request_url: &str) -> FetchOutcome {
        let outcome = self.run(request_url).await;
        match (&outcome, outcome.diagnostic()) {
            (_, None) => self.logger.info(&format!("Loaded {} articles", outcome.articles().len())),
            (FetchOutcome::EmptyInput, Some(diagnostic)) => self.logger.warn(&diagnostic),
            (_, Some(diagnostic)) => self.logger.error(&diagnostic),
        }
        outcome
    }

    async fn run(&self, request_url: &str) -> FetchOutcome {
        let url = match create_url(request_url) {
            Ok(url) => url,
            Err(e) => return FetchOutcome::InvalidUrl(e.to_string()),
        };

        self.logger.debug(&format!("GET {}{}", url.host_str().unwrap_or_default(), url.path()));

        match self.make_http_request(url).await {
            Ok(body) => extract_articles(&body),
            Err(Error::HttpStatus(code)) => FetchOutcome::HttpStatus(code),
            Err(e) => FetchOutcome::NetworkError(e.to_string()),
        }
    }

    /// The response is owned by this call; dropping it on any return path
    /// releases the connection.
    async fn make_http_request(&self, url: Url) -> Result<String> {
        // Connecting is bounded by the client; the head then gets one read timeout.
        let mut response = within(
            self.connect_timeout + self.read_timeout,
            self.client.get(url).send(),
        )
        .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        // The read timeout applies to each chunk, not to the whole body.
        let mut body = Vec::new();
        while let Some(chunk) = within(self.read_timeout, response.chunk()).await? {
            body.extend_from_slice(&chunk);
        }
        Ok(join_lines(&String::from_utf8_lossy(&body)))
    }
}

#[async_trait]
impl ArticleSource for FeedFetcher {
    fn name(&self) -> &str {
        "The Guardian"
    }

    async fn fetch(&self, request_url: &str) -> FetchOutcome {
        FeedFetcher::fetch(self, request_url).await
    }
}

fn create_url(request_url: &str) -> Result<Url> {
    let url = Url::parse(request_url)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}

async fn within<T, F>(limit: Duration, future: F) -> Result<T>
where
    F: Future<Output = reqwest::Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(Error::Timeout(limit.as_millis())),
    }
}

/// Concatenates the lines of `text` with their terminators removed.
pub(crate) fn join_lines(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
