use anyhow::{Context, Result, bail};
use bookgraph::{
    BookIndex, DEFAULT_CHUNK_CAPACITY, DEFAULT_FILE_PREFIX, DEFAULT_SEARCH_LIMIT, PipelineConfig,
    config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR},
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bookgraph")]
#[command(about = "Merge, filter and re-chunk a similar-books dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge records by title and write chunked graph files
    Build {
        /// Line-delimited JSON input
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Directory for the chunk files (created if missing)
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Books per chunk file
        #[arg(long, default_value_t = DEFAULT_CHUNK_CAPACITY)]
        chunk_size: usize,
        /// Chunk file name prefix
        #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
        prefix: String,
        /// Also write manifest.json with counts and checksums
        #[arg(long)]
        manifest: bool,
    },
    /// Search chunk files by title
    Search {
        /// Title text to look for (case-insensitive)
        query: String,
        /// Directory holding the chunk files
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        data_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
        prefix: String,
        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Find the shortest similar-books chain between two books
    Path {
        /// Start book id (or title with --by-title)
        from: String,
        /// End book id (or title with --by-title)
        to: String,
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        data_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
        prefix: String,
        /// Treat FROM and TO as exact titles instead of ids
        #[arg(long)]
        by_title: bool,
        /// Print the path with its neighbourhood as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output_dir,
            chunk_size,
            prefix,
            manifest,
        } => {
            let config = PipelineConfig::new(input, output_dir)
                .chunk_capacity(chunk_size)
                .file_prefix(prefix)
                .write_manifest(manifest);
            build(&config)
        }
        Commands::Search {
            query,
            data_dir,
            prefix,
            limit,
        } => search(&data_dir, &prefix, &query, limit),
        Commands::Path {
            from,
            to,
            data_dir,
            prefix,
            by_title,
            json,
        } => path(&data_dir, &prefix, &from, &to, by_title, json),
    }
}

fn build(config: &PipelineConfig) -> Result<()> {
    let summary = bookgraph::run(
        config,
        |surviving, removed| {
            println!("Total books after filtering: {}", surviving);
            println!("Books removed (no similar_books): {}", removed);
        },
        |chunk| {
            println!("Wrote {} ({} books)", chunk.path.display(), chunk.book_count);
        },
    )
    .with_context(|| format!("Failed to build graph from {}", config.input.display()))?;

    if let Some(manifest_path) = &summary.manifest_path {
        println!("Wrote {}", manifest_path.display());
    }

    println!("Done!");
    Ok(())
}

fn search(data_dir: &Path, prefix: &str, query: &str, limit: usize) -> Result<()> {
    let index = load_index(data_dir, prefix)?;

    let results = index.search(query, limit);
    if results.is_empty() {
        println!("No books match \"{}\"", query);
        return Ok(());
    }

    for book in results {
        println!("{}\t{}", book.book_id, book.title);
    }
    Ok(())
}

fn path(
    data_dir: &Path,
    prefix: &str,
    from: &str,
    to: &str,
    by_title: bool,
    json: bool,
) -> Result<()> {
    let index = load_index(data_dir, prefix)?;

    let resolve = |key: &str| -> Result<String> {
        let book = if by_title {
            index.find_by_title(key)
        } else {
            index.get(key)
        };
        match book {
            Some(book) => Ok(book.book_id.clone()),
            None => bail!("No book found for \"{}\"", key),
        }
    };
    let start = resolve(from)?;
    let end = resolve(to)?;

    let Some(result) = index.shortest_path(&start, &end) else {
        println!("No path found between these books.");
        return Ok(());
    };

    if json {
        let graph = index.subgraph(&result);
        let text = serde_json::to_string_pretty(&graph).context("Failed to serialize subgraph")?;
        println!("{}", text);
        return Ok(());
    }

    let titles: Vec<&str> = result
        .path
        .iter()
        .map(|id| index.get(id).map(|b| b.title.as_str()).unwrap_or(id.as_str()))
        .collect();

    println!("{}", titles.join(" → "));
    let degrees = result.degrees();
    println!(
        "{} degree{} of separation, {} books explored",
        degrees,
        if degrees == 1 { "" } else { "s" },
        result.explored
    );
    Ok(())
}

fn load_index(data_dir: &Path, prefix: &str) -> Result<BookIndex> {
    BookIndex::load_dir(data_dir, prefix)
        .with_context(|| format!("Failed to load chunk files from {}", data_dir.display()))
}
