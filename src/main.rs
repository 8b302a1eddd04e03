use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paystation::engine::StationEngine;
use paystation::reader::EventReader;
use paystation::writer::ReportWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events CSV file
    input: PathBuf,

    /// Output format for the outcome report
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine = StationEngine::new();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = engine.process_event(event) {
                    eprintln!("Error processing event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let outcomes = engine.into_results();

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = ReportWriter::new(stdout.lock());
            writer.write_outcomes(&outcomes).into_diagnostic()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &outcomes).into_diagnostic()?;
            println!();
        }
    }

    Ok(())
}
