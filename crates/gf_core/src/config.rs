use std::str::FromStr;
use std::time::Duration;

use crate::query::{SearchQuery, DEFAULT_ENDPOINT};
use crate::{Error, Result};

pub const DEFAULT_PAGE_SIZE: &str = "10";
pub const DEFAULT_KEYWORDS: &str = "news";
/// The Guardian's public developer key.
pub const DEFAULT_API_KEY: &str = "test";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Settings a feed load is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub endpoint: String,
    pub page_size: String,
    pub keywords: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE.to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl FeedConfig {
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(&self.endpoint, &self.page_size, &self.keywords, &self.api_key)
    }

    pub fn request_url(&self) -> String {
        self.search_query().build_url()
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        if self.connect_timeout.is_zero() {
            return Err(Error::Config("connect timeout must be greater than zero".to_string()));
        }
        if self.read_timeout.is_zero() {
            return Err(Error::Config("read timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

const TOO_LARGE: &str = "Duration is too large";

/// Timeout option value such as `15s`, `1m30s` or `10000ms`.
/// A bare number is taken as milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_millis = 0u64;
        let mut current_number = String::new();
        let mut chars = s.trim().chars().peekable();
        let mut seen_number = false;

        while let Some(c) = chars.next() {
            if c.is_ascii_digit() {
                current_number.push(c);
                seen_number = true;
                continue;
            }
            if c.is_whitespace() {
                continue;
            }

            if current_number.is_empty() {
                return Err(format!("Unit without a number: {}", c));
            }
            let num = current_number.parse::<u64>().map_err(|_| TOO_LARGE.to_string())?;
            let multiplier = match c {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                's' => 1_000,
                'm' => 60_000,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            total_millis = num
                .checked_mul(multiplier)
                .and_then(|millis| total_millis.checked_add(millis))
                .ok_or_else(|| TOO_LARGE.to_string())?;
            current_number.clear();
        }

        if !current_number.is_empty() {
            total_millis = current_number
                .parse::<u64>()
                .ok()
                .and_then(|num| total_millis.checked_add(num))
                .ok_or_else(|| TOO_LARGE.to_string())?;
        }

        if !seen_number {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_millis(total_millis)))
    }
}

impl From<HumanDuration> for Duration {
    fn from(value: HumanDuration) -> Self {
        value.0
    }
}
