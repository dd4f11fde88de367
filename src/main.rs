use anyhow::Context;
use clap::Parser;
use prefx::{top_matches, top_matches_par, Dataset, Pearson};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank entities by how similar their ratings are to a reference entity
#[derive(Parser, Debug)]
#[command(name = "prefx")]
#[command(about = "Top-N similarity matching over rating data", long_about = None)]
struct Args {
    /// JSON dataset file: {"entity": {"item": rating, ...}, ...}
    #[arg(short, long)]
    data: PathBuf,

    /// Reference entity to find matches for
    #[arg(short, long)]
    entity: String,

    /// Number of matches to return
    #[arg(short = 'n', long, default_value_t = prefx::DEFAULT_LIMIT)]
    limit: usize,

    /// Rank items instead of entities (swap entity and item roles)
    #[arg(long)]
    transpose: bool,

    /// Score candidates on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Print matches as a JSON array
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut dataset = Dataset::from_json_file(&args.data)
        .with_context(|| format!("failed to load dataset from {:?}", args.data))?;
    if args.transpose {
        dataset = dataset.transpose();
    }
    info!("Loaded {} entities from {:?}", dataset.len(), args.data);

    let matches = if args.parallel {
        top_matches_par(&dataset, &args.entity, args.limit, &Pearson)?
    } else {
        top_matches(&dataset, &args.entity, args.limit, &Pearson)?
    };
    info!("Found {} matches for {}", matches.len(), args.entity);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for m in &matches {
            println!("{:.2}\t{}", m.score, m.entity);
        }
    }

    Ok(())
}
