use std::io::Write;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use gf_client::{check_connectivity, init_logging, FeedFetcher, FeedLoader};
use gf_core::config::{DEFAULT_API_KEY, DEFAULT_KEYWORDS, DEFAULT_PAGE_SIZE};
use gf_core::{Article, FeedConfig, FetchOutcome, HumanDuration, DEFAULT_ENDPOINT};
use tracing::info;

const NO_FEED_NEWS: &str = "No feed news found.";
const NO_INTERNET_CONNECTION: &str = "No internet connection.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Search The Guardian from the terminal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    feed: FeedArgs,
    /// Print the articles as JSON instead of a list
    #[arg(long)]
    json: bool,
    /// Skip the connectivity check and always attempt the request
    #[arg(long)]
    offline_ok: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Content search endpoint
    #[arg(long, env = "GUARDIAN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Number of articles to request
    #[arg(long, env = "GUARDIAN_PAGE_SIZE", default_value = DEFAULT_PAGE_SIZE)]
    page_size: String,
    /// Search keywords
    #[arg(short, long, env = "GUARDIAN_QUERY", default_value = DEFAULT_KEYWORDS)]
    query: String,
    #[arg(long, env = "GUARDIAN_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    api_key: String,
    /// Connect timeout (e.g. 15s, 15000ms)
    #[arg(long, default_value = "15000ms")]
    connect_timeout: HumanDuration,
    /// Read timeout (e.g. 10s, 10000ms)
    #[arg(long, default_value = "10000ms")]
    read_timeout: HumanDuration,
}

impl FeedArgs {
    fn into_config(self) -> FeedConfig {
        FeedConfig {
            endpoint: self.endpoint,
            page_size: self.page_size,
            keywords: self.query,
            api_key: self.api_key,
            connect_timeout: self.connect_timeout.into(),
            read_timeout: self.read_timeout.into(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Fetch and list articles (default)
    Search,
    /// Print the request URL without fetching it
    Url,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.feed.into_config();
    config.validate()?;

    match cli.command.unwrap_or(Commands::Search) {
        Commands::Url => println!("{}", config.request_url()),
        Commands::Search => run_search(&config, cli.json, cli.offline_ok).await?,
    }

    Ok(())
}

async fn run_search(config: &FeedConfig, json: bool, offline_ok: bool) -> anyhow::Result<()> {
    let connected = offline_ok || check_connectivity(&config.endpoint, config.connect_timeout).await;

    let loader = FeedLoader::new(Arc::new(FeedFetcher::from_config(config)?));
    let Some(handle) = loader.start_if_connected(connected, config.request_url()) else {
        println!("{}", NO_INTERNET_CONNECTION);
        return Ok(());
    };

    info!("📰 Loading \"{}\" from {}", config.keywords, config.endpoint);
    let outcome = tokio::select! {
        outcome = handle.finished() => outcome.unwrap_or_else(|| FetchOutcome::NetworkError("load task failed".to_string())),
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, discarding pending load");
            return Ok(());
        }
    };

    let articles = outcome.into_articles();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&articles, json, &mut out)
}

fn render(articles: &[Article], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, articles)?;
        writeln!(out)?;
        return Ok(());
    }

    if articles.is_empty() {
        writeln!(out, "{}", NO_FEED_NEWS)?;
        return Ok(());
    }

    for (i, article) in articles.iter().enumerate() {
        let item = article.list_item();
        writeln!(out, "{:>2}. [{}] {}", i + 1, item.section, item.title)?;
        writeln!(out, "    {} · {}", item.author, item.date)?;
        writeln!(out, "    {}", article.url())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    fn articles() -> Vec<Article> {
        vec![
            Article::new("T1", Some("Jane Doe".into()), "World", "2020-01-01T00:00:00Z", "http://x/1"),
            Article::new("T2", None, "Tech", "2020-01-02T00:00:00Z", "http://x/2"),
        ]
    }

    fn rendered(articles: &[Article], json: bool) -> String {
        let mut out = Vec::new();
        render(articles, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_feed_config() {
        let cli = Cli::try_parse_from(["gf"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.feed.into_config(), FeedConfig::default());
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "gf", "--page-size", "3", "-q", "tennis", "--read-timeout", "2s", "--json", "url",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.command, Some(Commands::Url));

        let config = cli.feed.into_config();
        assert_eq!(config.page_size, "3");
        assert_eq!(config.keywords, "tennis");
        assert_eq!(config.read_timeout, Duration::from_secs(2));
        assert!(config.request_url().contains("q=tennis"));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(Cli::try_parse_from(["gf", "--connect-timeout", "soon"]).is_err());
    }

    #[test]
    fn test_render_list() {
        let text = rendered(&articles(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1. [World] T1");
        assert_eq!(lines[1], "    Jane Doe · Jan 1, 2020");
        assert_eq!(lines[2], "    http://x/1");
        assert_eq!(lines[3], " 2. [Tech] T2");
        assert_eq!(lines[4], "    (unknown author) · Jan 2, 2020");
    }

    #[test]
    fn test_render_empty_state() {
        assert_eq!(rendered(&[], false), "No feed news found.\n");
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value = serde_json::from_str(&rendered(&articles(), true)).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["author"], "(unknown author)");
        assert_eq!(value[0]["webUrl"], serde_json::Value::Null);
        assert_eq!(value[0]["url"], "http://x/1");
    }
}
