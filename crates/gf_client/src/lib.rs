pub mod connectivity;
pub mod fetch;
pub mod loader;
pub mod logging;
pub mod parse;

pub use connectivity::check_connectivity;
pub use fetch::FeedFetcher;
pub use loader::{FeedLoader, LoadHandle};
pub use logging::{init_logging, Logger};
pub use parse::extract_articles;
