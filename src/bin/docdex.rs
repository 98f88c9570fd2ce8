//! `docdex` CLI: build a persisted inverted index, then resolve AND queries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docdex::analyze::Analyzer;
use docdex::index::InvertedIndex;
use docdex::{corpus, store};
use std::io::Read;
use std::path::{Path, PathBuf};

const DEFAULT_INDEX_PATH: &str = "inverted.index";

#[derive(Parser, Debug)]
#[command(author, version, about = "Inverted index CLI: load, build and query document indexes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a document file, build the inverted index and save it.
    Build {
        /// Path to the document file (one `<id><TAB><text>` document per line).
        #[arg(short, long)]
        dataset: PathBuf,

        /// Output path for the index artifact.
        #[arg(short, long, default_value = DEFAULT_INDEX_PATH)]
        output: PathBuf,
    },

    /// Load a saved index and print matching document ids per query.
    Query {
        /// Path to the index artifact (produced by `build`).
        #[arg(long, default_value = DEFAULT_INDEX_PATH)]
        index: PathBuf,

        /// One query: terms that must all match. Repeat the flag for more queries.
        #[arg(
            short,
            long = "query",
            num_args = 1..,
            required_unless_present = "query_file",
            conflicts_with = "query_file"
        )]
        query: Vec<Vec<String>>,

        /// Read queries from a file, one whitespace-split query per line (`-` for stdin).
        #[arg(long, value_name = "PATH")]
        query_file: Option<PathBuf>,
    },
}

fn read_queries(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading queries from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading queries from {}", path.display()))?
    };

    // Blank lines are not queries; they are skipped rather than answered.
    Ok(text
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<String>>())
        .filter(|terms| !terms.is_empty())
        .collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Build { dataset, output } => {
            let documents = corpus::load_documents(&dataset)?;
            let index = InvertedIndex::build(&Analyzer::default(), &documents);
            store::dump(&index, &output)?;

            println!(
                "Indexed {} documents ({} terms) to {:?}",
                documents.len(),
                index.len(),
                output
            );
        }
        Commands::Query {
            index,
            query,
            query_file,
        } => {
            let ix = store::load(&index)?;

            let queries = match query_file {
                Some(path) => read_queries(&path)?,
                None => query,
            };

            // Queries are independent: one empty result does not affect the next.
            for terms in queries {
                let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
                let ids: Vec<String> = ix.query(&terms).iter().map(u32::to_string).collect();
                println!("{}", ids.join(","));
            }
        }
    }

    Ok(())
}
