use std::fs::File;
use std::io::BufWriter;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use levenshtein_calculator::fasta_parser;
use levenshtein_calculator::{compute, LogSink, MatrixCapture, Mode, Score, TraceSink};

/// Levenshtein distance between two strings or two FASTA records.
#[derive(Parser, Debug)]
#[command(name = "levenshtein_calculator", version, about)]
struct Cli {
    /// First sequence (a FASTA path with --fasta)
    a: String,

    /// Second sequence (a FASTA path with --fasta)
    b: String,

    /// Print the similarity ratio (n + m - d) / (n + m) instead of the distance
    #[arg(long)]
    ratio: bool,

    /// Log the filled distance matrix
    #[arg(long)]
    print_matrix: bool,

    /// Treat A and B as FASTA files (.gz supported) and compare their first records
    #[arg(long)]
    fasta: bool,

    /// Write the distance matrix to this path as an Arrow IPC file
    #[arg(long, value_name = "PATH")]
    matrix_ipc: Option<String>,

    /// Print a JSON report instead of the bare number
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    len_a: usize,
    len_b: usize,
    mode: Mode,
    score: Score,
}

/// Fans one matrix out to every sink the flags asked for.
struct CliSink {
    log: Option<LogSink>,
    capture: Option<MatrixCapture>,
}

impl TraceSink for CliSink {
    fn emit(&mut self, matrix: &levenshtein_calculator::DistanceMatrix) {
        if let Some(log) = self.log.as_mut() {
            log.emit(matrix);
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.emit(matrix);
        }
    }
}

/// Runs the engine for the parsed flags. The returned sink holds whatever
/// the flags asked to capture.
fn evaluate(cli: &Cli) -> Result<(Report, CliSink), Box<dyn std::error::Error>> {
    let mode = if cli.ratio { Mode::Ratio } else { Mode::Absolute };
    let mut sink = CliSink {
        log: cli.print_matrix.then(LogSink::default),
        capture: cli.matrix_ipc.as_ref().map(|_| MatrixCapture::new()),
    };
    let tracing_enabled = sink.log.is_some() || sink.capture.is_some();
    let trace: Option<&mut dyn TraceSink> = if tracing_enabled { Some(&mut sink) } else { None };

    let (score, len_a, len_b) = if cli.fasta {
        let a = fasta_parser::load_sequence(&cli.a)?;
        let b = fasta_parser::load_sequence(&cli.b)?;
        (compute(&a, &b, mode, trace)?, a.len(), b.len())
    } else {
        let a: Vec<char> = cli.a.chars().collect();
        let b: Vec<char> = cli.b.chars().collect();
        (compute(&a, &b, mode, trace)?, a.len(), b.len())
    };

    Ok((Report { len_a, len_b, mode, score }, sink))
}

/// Writes the captured matrix to `path`. Returns false when no matrix was
/// built because an input was empty; the file is not created then.
fn write_matrix(path: &str, sink: &CliSink) -> Result<bool, Box<dyn std::error::Error>> {
    match sink.capture.as_ref().and_then(MatrixCapture::matrix) {
        Some(matrix) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;
            matrix.write_ipc(BufWriter::new(file))?;
            tracing::info!(
                path = %path,
                rows = matrix.rows(),
                cols = matrix.cols(),
                "wrote distance matrix"
            );
            Ok(true)
        }
        None => {
            tracing::warn!(path = %path, "an input is empty, no matrix was built; nothing written");
            Ok(false)
        }
    }
}

fn render(report: &Report, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(report.score.to_string())
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (report, sink) = evaluate(&cli)?;
    if let Some(path) = &cli.matrix_ipc {
        write_matrix(path, &sink)?;
    }
    println!("{}", render(&report, cli.json)?);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
