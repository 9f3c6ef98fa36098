use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordstem::{get_r1_r2, porter2_stemmer, porter2_trace};

#[derive(Parser, Debug)]
struct Args {
    /// Path to target CSV file, a "stem" column will be appended
    #[arg(long)]
    path: Option<String>,

    /// Index of the CSV column containing the words to stem
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Path to a reference vocabulary made of "word stem" lines
    #[arg(long, conflicts_with = "path")]
    vocabulary: Option<String>,

    /// Print the R1 & R2 regions of the words
    #[arg(long)]
    regions: bool,

    /// Print the word obtained after each stage of the stemmer
    #[arg(long)]
    explain: bool,

    /// Words to stem
    word: Vec<String>,
}

fn stem_csv(path: &str, column: usize) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("could not open {}", path))?;
    let mut reader = simd_csv::Reader::from_reader(file);
    let mut writer = simd_csv::Writer::from_writer(std::io::stdout());

    let mut record = reader.byte_headers()?.clone();

    if column >= record.len() {
        bail!("column {} is out of bounds ({} columns)", column, record.len());
    }

    record.push_field(b"stem");
    writer.write_byte_record(&record)?;

    let mut count: usize = 0;

    while reader.read_byte_record(&mut record)? {
        let stem = porter2_stemmer(std::str::from_utf8(&record[column])?);
        record.push_field(stem.as_bytes());

        writer.write_byte_record(&record)?;
        count += 1;
    }

    writer.flush()?;
    info!(count, "stemmed rows of {}", path);

    Ok(())
}

fn score_vocabulary(path: &str) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("could not open {}", path))?;

    let mut total: usize = 0;
    let mut matched: usize = 0;

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();

        let (word, expected) = match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => continue,
            (Some(word), Some(expected), None) => (word, expected),
            _ => bail!("invalid vocabulary line {}: {:?}", i + 1, line),
        };

        let stem = porter2_stemmer(word);
        total += 1;

        if stem == expected {
            matched += 1;
        } else {
            debug!(word, expected, stem = %stem, "mismatch");
        }
    }

    let accuracy = if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    };

    info!(matched, total, "scored vocabulary {}", path);
    println!("{}/{} ({:.2}%)", matched, total, accuracy);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.path {
        return stem_csv(path, args.column);
    }

    if let Some(path) = &args.vocabulary {
        return score_vocabulary(path);
    }

    for word in args.word {
        println!("{} => {}", &word, porter2_stemmer(&word));

        if args.regions {
            let (r1, r2) = get_r1_r2(&word);
            println!("  R1: {:?}, R2: {:?}", r1, r2);
        }

        if args.explain {
            for (stage, current) in porter2_trace(&word) {
                println!("  {:<10} {}", stage, current);
            }
        }
    }

    Ok(())
}
