//! ringq - keep the last N lines of a stream
//!
//! Reads lines from a file or stdin into a ring queue and prints what
//! survives, oldest first unless physical order is requested.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::info;

use crate::config::RingConfig;
use crate::ring::RingBuffer;
use crate::telemetry::{init_tracing, init_tracing_verbose};

#[derive(Parser, Debug)]
#[command(name = "ringq")]
#[command(about = "Keep the most recent lines of a stream in a fixed-size ring")]
#[command(version)]
struct Cli {
    /// Input file (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Number of lines to keep (overrides config)
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Print raw storage order instead of oldest-first
    #[arg(long)]
    physical: bool,

    /// Resize the ring after reading, before printing
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    resize: Option<i64>,

    /// Log ring activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing();
    }

    let config = RingConfig::load(cli.config.as_deref())?;

    let ring: RingBuffer<String> = match cli.capacity {
        Some(n) => RingBuffer::new(n)?,
        None => config.build(),
    };

    let read = match cli.file.as_deref() {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input {}", path))?;
            ingest(&ring, BufReader::new(file))?
        }
        None => ingest(&ring, io::stdin().lock())?,
    };

    if let Some(n) = cli.resize {
        ring.resize(n)?;
    }

    info!(
        read,
        capacity = ring.len(),
        stored = ring.stored(),
        "Finished reading input"
    );

    let physical = cli.physical || config.physical_order;
    let stdout = io::stdout();
    emit(&ring, physical, &mut stdout.lock())
}

/// Append every line of `reader`, returning how many were read.
fn ingest<R: BufRead>(ring: &RingBuffer<String>, reader: R) -> Result<usize> {
    let mut read = 0;
    for line in reader.lines() {
        ring.append(line.context("Failed to read input line")?);
        read += 1;
    }
    Ok(read)
}

fn emit<W: Write>(ring: &RingBuffer<String>, physical: bool, out: &mut W) -> Result<()> {
    if physical {
        let mut result = Ok(());
        ring.range(|line| {
            if result.is_ok() {
                result = writeln!(out, "{}", line);
            }
        });
        result?;
    } else {
        for line in ring.slice() {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}
