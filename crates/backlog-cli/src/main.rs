//! Backlog CLI
//!
//! Command-line front end for the backlog library store. Each invocation is
//! one synchronous store operation: manage libraries, save game listings into
//! them, list, search, or remove saved records.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use backlog_config::BacklogConfig;
use backlog_library::{GameListing, GameRecord, LibraryStore};

mod cli;

fn main() -> Result<()> {
    setup_logging();

    let matches = cli::build_command().get_matches();

    let config = load_config(&matches)?;
    let db_path = matches
        .get_one::<String>("database")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.database_path());

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    debug!(path = %db_path.display(), "opening store");
    let mut store = LibraryStore::open(&db_path)
        .with_context(|| format!("Failed to open store at {}", db_path.display()))?;

    match matches.subcommand() {
        Some(("library", sub)) => run_library(&mut store, sub),
        Some(("game", sub)) => run_game(&mut store, sub),
        _ => unreachable!("subcommand required"),
    }
}

fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<BacklogConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => BacklogConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}")),
        None => BacklogConfig::load_default().context("Failed to load default config"),
    }
}

fn run_library(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("create", sub)) => {
            let name = sub.get_one::<String>("name").expect("required arg");
            let library = store.create_library(name)?;
            println!("Created library {} (id {})", library.name, library.id);
        }
        Some(("list", _)) => {
            let libraries = store.list_libraries()?;
            if libraries.is_empty() {
                println!("No libraries");
                return Ok(());
            }
            for library in libraries {
                let count = store.record_count(library.id)?;
                println!("{:>4}  {}  ({count} games)", library.id, library.name);
            }
        }
        Some(("delete", sub)) => {
            let id = *sub.get_one::<i64>("id").expect("required arg");
            store.delete_library(id)?;
            println!("Deleted library {id}");
        }
        _ => unreachable!("subcommand required"),
    }
    Ok(())
}

fn run_game(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("save", sub)) => {
            let library_id = *sub.get_one::<i64>("library-id").expect("required arg");
            let record = record_from_matches(sub)?;
            store.save_record(library_id, &record)?;
            println!("Saved {} to library {library_id}", record.title);
        }
        Some(("list", sub)) => {
            let library_id = *sub.get_one::<i64>("library-id").expect("required arg");
            print_records(&store.list_records(library_id)?);
        }
        Some(("remove", sub)) => {
            let library_id = *sub.get_one::<i64>("library-id").expect("required arg");
            let game_id = *sub.get_one::<i64>("game-id").expect("required arg");
            store.delete_record(library_id, game_id)?;
            println!("Removed game {game_id} from library {library_id}");
        }
        Some(("search", sub)) => {
            let library_id = *sub.get_one::<i64>("library-id").expect("required arg");
            let query = sub.get_one::<String>("query").expect("required arg");
            print_records(&store.search_records(library_id, query)?);
        }
        _ => unreachable!("subcommand required"),
    }
    Ok(())
}

/// Build the record to save, either from a JSON listing file or from flags
fn record_from_matches(matches: &ArgMatches) -> Result<GameRecord> {
    if let Some(path) = matches.get_one::<String>("json") {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing from {path}"))?;
        let listing: GameListing = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid game listing in {path}"))?;
        return Ok(listing.into());
    }

    Ok(GameRecord {
        game_id: *matches.get_one::<i64>("id").expect("required arg"),
        title: matches.get_one::<String>("title").expect("required arg").clone(),
        platform: matches
            .get_one::<String>("platform")
            .expect("required arg")
            .clone(),
        description: matches.get_one::<String>("description").cloned(),
        image_url: matches.get_one::<String>("image-url").cloned(),
        score: matches.get_one::<i64>("score").copied(),
        done: matches.get_flag("done"),
    })
}

fn print_records(records: &[GameRecord]) {
    if records.is_empty() {
        println!("No games");
        return;
    }
    for record in records {
        let score = record
            .score
            .map_or_else(|| "--".to_string(), |s| s.to_string());
        let done = if record.done { "done" } else { "todo" };
        println!(
            "{:>6}  {:<40}  {:<12}  {:>3}  {}",
            record.game_id, record.title, record.platform, score, done
        );
    }
}
