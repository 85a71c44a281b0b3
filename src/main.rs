use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use blogroll::{
    Blogroll, CacheStore, Config, FeedFetcher, HyperClient, JsonFileStore, KvStore, RenderFormat,
};

#[derive(Parser)]
#[command(name = "blogroll", about = "Fetch and render your remote feed subscriptions")]
struct Cli {
    /// Username at the export service (overrides the config file).
    #[arg(long)]
    user: Option<String>,

    /// Restrict the export to one folder (overrides the config file).
    #[arg(long)]
    folder: Option<String>,

    /// Seconds a cached export stays fresh (overrides the config file).
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Markup preset to render with.
    #[arg(long, value_enum, default_value = "unordered-list")]
    format: FormatArg,

    /// Path of the JSON cache file (defaults to ~/.cache/blogroll/cache.json).
    #[arg(long)]
    cache_file: Option<PathBuf>,

    /// Empty the cache and exit.
    #[arg(long)]
    clear_cache: bool,

    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// `<ul>`/`<li>` markup; custom template sets are a library-level feature.
    UnorderedList,
}

impl From<FormatArg> for RenderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::UnorderedList => RenderFormat::UnorderedList,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("blogroll debug logging enabled");
    }

    let config = Config::load()?;
    let mut feed = config.feed.clone();
    if let Some(user) = cli.user {
        feed.username = user;
    }
    if let Some(folder) = cli.folder {
        feed.base_folder = folder;
    }
    if let Some(secs) = cli.refresh_secs {
        feed.refresh_interval_secs = secs;
    }

    let cache_path = cli.cache_file.unwrap_or_else(default_cache_path);
    let store: Arc<dyn KvStore> = Arc::new(JsonFileStore::open(&cache_path)?);
    let cache = CacheStore::new(store);

    if cli.clear_cache {
        cache.clear();
        eprintln!("cache cleared: {}", cache_path.display());
        return Ok(());
    }

    let fetcher = FeedFetcher::new(cache, HyperClient::new(), config.export.base_url.clone());
    let markup = Blogroll::new(feed, fetcher).render(cli.format.into()).await?;
    println!("{markup}");
    Ok(())
}

fn default_cache_path() -> PathBuf {
    std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string())).join(".cache")
        })
        .join("blogroll")
        .join("cache.json")
}
