use anyhow::{anyhow, bail, Context, Result};
use catalog::{load_creators, Creator, CreatorFeed, MarketplaceConfig, ALL_CONTENT_TYPES};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{FacetOptions, FilterPipeline, FilterState};
use session::{BrowseSession, BrowseView};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Creator Finder - narrow a creator marketplace listing
#[derive(Parser)]
#[command(name = "creator-finder")]
#[command(about = "Search and filter creator profiles by price, content type and attributes", long_about = None)]
struct Cli {
    /// Creator feed: a JSON file, or a directory of *.json shards
    #[arg(short, long, default_value = "data/creators.json")]
    data: PathBuf,

    /// JSON file overriding price buckets and default facet options
    #[arg(short, long, env = "CREATOR_FINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List creators matching the given filters
    Search {
        /// Free-text query (every word must appear somewhere in the profile)
        #[arg(short, long)]
        query: Option<String>,

        /// Price bucket key (see `options`)
        #[arg(short, long)]
        price: Option<String>,

        /// Exact content type, or "all"
        #[arg(long)]
        content_type: Option<String>,

        /// Toggle an attribute; repeat to require several
        #[arg(short, long = "attribute")]
        attributes: Vec<String>,

        /// Maximum number of creators to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show price buckets and the content type / attribute options
    Options,

    /// Apply random filter states to the feed and report latency
    Benchmark {
        /// Number of filter evaluations
        #[arg(long, default_value = "1000")]
        iterations: usize,

        /// Number of concurrent workers
        #[arg(long, default_value = "4")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Arc::new(load_config(cli.config.as_deref())?);
    let mut session = BrowseSession::new(config.clone());

    // Load the feed off the async runtime; the session reports Loading meanwhile
    let data_path = cli.data.clone();
    let load = tokio::task::spawn_blocking(move || load_creators(&data_path));
    if session.view().is_loading() {
        println!("Loading creators from {}...", cli.data.display());
    }
    let start = Instant::now();
    let creators = load
        .await
        .context("Feed loading task panicked")?
        .with_context(|| format!("Failed to load creator feed from {}", cli.data.display()))?;
    println!(
        "{} Loaded {} creators in {:?}",
        "✓".green(),
        creators.len(),
        start.elapsed()
    );
    session.set_feed(CreatorFeed::Loaded(creators));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            price,
            content_type,
            attributes,
            limit,
        } => handle_search(&mut session, query, price, content_type, attributes, limit)?,
        Commands::Options => handle_options(&session),
        Commands::Benchmark {
            iterations,
            concurrent,
        } => handle_benchmark(&session, iterations, concurrent).await?,
    }

    Ok(())
}

/// Built-in configuration, or the overrides file when one is given
fn load_config(path: Option<&Path>) -> Result<MarketplaceConfig> {
    match path {
        Some(path) => MarketplaceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(MarketplaceConfig::default()),
    }
}

/// Handle the 'search' command
fn handle_search(
    session: &mut BrowseSession,
    query: Option<String>,
    price: Option<String>,
    content_type: Option<String>,
    attributes: Vec<String>,
    limit: usize,
) -> Result<()> {
    if let Some(query) = query {
        session.set_query(query);
    }
    if let Some(price) = price {
        if let Err(err) = session.set_price_bucket(&price) {
            let keys: Vec<&str> = session
                .config()
                .price_buckets
                .iter()
                .map(|b| b.key.as_str())
                .collect();
            return Err(anyhow!("{} (expected one of: {})", err, keys.join(", ")));
        }
    }
    if let Some(content_type) = content_type {
        session.set_content_type(content_type);
    }
    for attribute in &attributes {
        session.toggle_attribute(attribute);
    }

    let view = session.view();
    print_results(&view, limit);
    Ok(())
}

/// Handle the 'options' command
fn handle_options(session: &BrowseSession) {
    let view = session.view();
    let config = session.config();

    println!("{}", "Price buckets:".bold().blue());
    for bucket in view.price_buckets {
        println!("  {:<12} {}", bucket.key, bucket.label);
    }

    println!("{}", "Content types:".bold().blue());
    println!("  {}", ALL_CONTENT_TYPES);
    print_options(view.content_type_options, config.content_types.len());

    println!("{}", "Attributes:".bold().blue());
    print_options(view.attribute_options, config.attributes.len());
}

/// Print an option list, marking the entries discovered in the feed
fn print_options(options: &[String], default_count: usize) {
    for (i, option) in options.iter().enumerate() {
        if i < default_count {
            println!("  {}", option);
        } else {
            println!("  {} {}", option, "(from feed)".dimmed());
        }
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    session: &BrowseSession,
    iterations: usize,
    concurrent: usize,
) -> Result<()> {
    if iterations == 0 || concurrent == 0 {
        bail!("iterations and concurrent must both be greater than zero");
    }

    let config = Arc::new(session.config().clone());
    let pipeline = Arc::new(FilterPipeline::standard(config.clone()));
    let creators: Arc<Vec<Creator>> = Arc::new(session.feed().creators_or_empty().to_vec());
    let options = Arc::new(session.options().clone());

    // Split the iterations across blocking workers
    let mut handles = vec![];
    for worker in 0..concurrent {
        let share = iterations / concurrent + usize::from(worker < iterations % concurrent);
        let pipeline = pipeline.clone();
        let creators = creators.clone();
        let options = options.clone();
        let config = config.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut timings = Vec::with_capacity(share);
            for _ in 0..share {
                let state = random_state(&config, &options, &creators);
                let start = Instant::now();
                pipeline.count(&creators, &state);
                timings.push(start.elapsed());
            }
            timings
        });
        handles.push(handle);
    }

    // Wait for all workers to complete and collect timings
    let mut timings: Vec<Duration> = vec![];
    for handle in handles {
        timings.extend(handle.await.context("Benchmark worker panicked")?);
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("Benchmark results ({} creators):", creators.len());
    println!("Evaluations: {}", timings.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} evaluations/second", throughput);

    Ok(())
}

/// Pick a random filter state drawn from the live options
fn random_state(config: &MarketplaceConfig, options: &FacetOptions, creators: &[Creator]) -> FilterState {
    let pick = |len: usize| rand::random::<u32>() as usize % len;

    let mut state = FilterState::new();

    if !creators.is_empty() && rand::random::<bool>() {
        let creator = &creators[pick(creators.len())];
        if let Some(word) = creator.tagline.split_whitespace().next() {
            state.set_search_query(word);
        }
    }
    if !config.price_buckets.is_empty() {
        state.set_price_bucket_key(config.price_buckets[pick(config.price_buckets.len())].key.clone());
    }
    if !options.content_types.is_empty() && rand::random::<bool>() {
        state.set_content_type_key(options.content_types[pick(options.content_types.len())].clone());
    }
    if !options.attributes.is_empty() {
        for _ in 0..pick(3) {
            state.toggle_attribute(&options.attributes[pick(options.attributes.len())]);
        }
    }
    state
}

/// Helper function to format and print the filtered listing
fn print_results(view: &BrowseView<'_>, limit: usize) {
    let Some(count) = view.match_count() else {
        println!("Still loading creators...");
        return;
    };

    // 1. Print a header with the match count
    let noun = if count == 1 { "match" } else { "matches" };
    print!("{}", format!("{} {}", count, noun).bold().blue());
    if view.has_active_filters {
        print!(" {}", "(filters active)".dimmed());
    }
    println!();

    // 2. Empty state
    if view.is_empty_result() {
        println!("No creators match those filters yet.");
        println!("Try removing a filter or widening the price range to see more results.");
        return;
    }

    // 3. One block per creator
    for (i, creator) in view.creators().iter().take(limit).enumerate() {
        let verified = if creator.verified {
            format!(" {}", "✓ verified".green())
        } else {
            String::new()
        };
        println!(
            "{}. {}{} {} • {} [from ${:.0}]",
            (i + 1).to_string().green(),
            creator.name.bold(),
            verified,
            creator.handle,
            creator.location,
            creator.starting_price
        );
        if !creator.tagline.is_empty() {
            println!("   {}", creator.tagline);
        }
        println!(
            "   Content: {}",
            creator.content_types.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        );
        println!("   Platforms: {}", creator.platforms.join(", "));
        println!(
            "   Attributes: {}",
            creator.attributes.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        );
        let days = if creator.next_available_days == 1 { "day" } else { "days" };
        println!(
            "   Responds in {}h • Next slot in {} {}",
            creator.response_time_hours, creator.next_available_days, days
        );
    }

    if count > limit {
        println!("... and {} more", count - limit);
    }
}
