//! Wordlist Curator - CLI
//!
//! Batch curation of word-frequency lists: length bucketing, re-splitting
//! of curated lists, and fixed-size answer/guess artifact extraction.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordlist_curator::{
    commands::{
        ExtractConfig, run_classify, run_extract, run_resplit,
        extract::{ANSWER_COUNT, SAMPLE_SIZE},
    },
    output::{print_classify_report, print_extract_report, print_resplit_report},
};

#[derive(Parser)]
#[command(
    name = "wordlist_curator",
    about = "Curate word-frequency lists into length buckets and answer/guess artifacts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a raw two-column frequency list into words5..words8 buckets
    Classify {
        /// Raw frequency file (`token count` per line, descending frequency)
        source: PathBuf,

        /// Directory to create the words{n}/ buckets under
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Re-bucket a curated list wlist_match{id}.txt into match{id}/len5..len8
    Resplit {
        /// Which curated list to process
        id: u32,

        /// Directory holding the curated lists
        #[arg(short, long, default_value = "words")]
        words_dir: PathBuf,
    },

    /// Serialize answer and guess artifacts from a frequency-ordered list
    Extract {
        /// Frequency-ordered word list (length-8 bucket)
        source: PathBuf,

        /// Directory to write answers.bin and guesses.bin under
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Number of lines to sample from the head of the list
        #[arg(short = 'n', long, default_value_t = SAMPLE_SIZE)]
        sample_size: usize,

        /// Size of the ranked answer subset
        #[arg(short = 'a', long, default_value_t = ANSWER_COUNT)]
        answer_count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { source, out_dir } => {
            let report = run_classify(&source, &out_dir)?;
            print_classify_report(&report);
        }
        Commands::Resplit { id, words_dir } => {
            let report = run_resplit(&words_dir, id)?;
            print_resplit_report(&report);
        }
        Commands::Extract {
            source,
            out_dir,
            sample_size,
            answer_count,
        } => {
            let config = ExtractConfig::new(sample_size, answer_count);
            let report = run_extract(&source, &out_dir, config)?;
            print_extract_report(&report);
        }
    }

    Ok(())
}
