use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use lindex::index::{IndexBuilder, IndexStore};
use lindex::output::{print_file_snippets, print_files_only, print_stats};
use lindex::query::{extract_snippets, search};
use lindex::utils::AppConfig;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "lindex")]
#[command(about = "Word-level index over text files with line-numbered snippets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Index file to use instead of the configured one
    #[arg(long, global = true)]
    index: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index, replacing any previous one
    Index {
        /// Directory to index
        #[arg(default_value = ".")]
        path: PathBuf,

        /// No progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Look up a word and show where it occurs
    Search {
        /// Word to look up
        term: String,

        /// Lines of context around each hit
        #[arg(short = 'C', long)]
        context: Option<usize>,

        /// Only list matching files with their hit counts
        #[arg(short = 'l', long)]
        files_only: bool,

        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },
    /// Show index statistics
    Stats,
    /// Delete the index
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    let store = IndexStore::new(cli.index.clone().unwrap_or_else(|| config.index_path()));

    match cli.command {
        Commands::Index { path, quiet } => run_index(&store, &path, quiet),
        Commands::Search {
            term,
            context,
            files_only,
            color,
        } => run_search(
            &store,
            &term,
            context.unwrap_or(config.context_lines),
            files_only,
            color.into(),
        ),
        Commands::Stats => run_stats(&store),
        Commands::Clear => {
            if store.clear()? {
                println!("Removed index: {}", store.path().display());
            } else {
                println!("No index at {}", store.path().display());
            }
            Ok(())
        }
    }
}

fn run_index(store: &IndexStore, path: &Path, quiet: bool) -> Result<()> {
    if !quiet {
        println!("Indexing: {}", path.display());
    }
    let start = Instant::now();

    let report = IndexBuilder::new(path)
        .with_progress(!quiet)
        .build()
        .with_context(|| format!("Failed to index {}", path.display()))?;
    store
        .save(&report.index)
        .with_context(|| format!("Failed to save index to {}", store.path().display()))?;

    for skipped in &report.skipped {
        eprintln!("Error reading {}: {}", skipped.path.display(), skipped.error);
    }

    println!(
        "Indexed {} files ({} words) in {:.2}s",
        report.indexed,
        report.index.len(),
        start.elapsed().as_secs_f64()
    );
    if !report.skipped.is_empty() {
        println!("({} files could not be read)", report.skipped.len());
    }
    println!("Index saved to {}", store.path().display());

    Ok(())
}

fn run_search(
    store: &IndexStore,
    term: &str,
    context: usize,
    files_only: bool,
    color: ColorChoice,
) -> Result<()> {
    if term.trim().is_empty() {
        bail!("Search term must not be empty");
    }

    let Some(index) = store.load()? else {
        bail!(
            "No index found at {}. Run 'lindex index <DIR>' first.",
            store.path().display()
        );
    };

    let result = search(&index, term);
    let mut stdout = StandardStream::stdout(color);

    if result.is_empty() {
        println!("No results found for '{}'.", term);
        return Ok(());
    }

    if files_only {
        print_files_only(&mut stdout, &result)?;
        return Ok(());
    }

    writeln!(
        stdout,
        "Found matches in {} files for '{}':\n",
        result.len(),
        result.term()
    )?;

    for (file, lines) in result.iter() {
        match extract_snippets(&index.resolve(file), lines, context) {
            Ok(blocks) => print_file_snippets(&mut stdout, file, &blocks)?,
            Err(e) => eprintln!("Error reading snippets: {}", e),
        }
    }

    Ok(())
}

fn run_stats(store: &IndexStore) -> Result<()> {
    let Some(index) = store.load()? else {
        println!("No index found at {}.", store.path().display());
        return Ok(());
    };

    print_stats(
        &mut std::io::stdout(),
        index.root(),
        store.path(),
        &index.stats(),
    )?;
    Ok(())
}
