pub mod config;
pub mod error;
pub mod outcome;
pub mod query;
pub mod source;
pub mod types;

pub use config::{FeedConfig, HumanDuration};
pub use error::{Error, Result};
pub use outcome::FetchOutcome;
pub use query::{build_url, SearchQuery, DEFAULT_ENDPOINT};
pub use source::ArticleSource;
pub use types::{Article, ListItem, UNKNOWN_AUTHOR};
