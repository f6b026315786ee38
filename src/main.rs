use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sensecolor::logger;
use sensecolor::sensor_pipeline::{
    FormatConfig, ReadingWriter, SampleReader, SampleReportPipeline,
};

use tracing::{error, info};

/// Convert captured light and color sensor samples into a readable report
#[derive(Parser, Debug)]
#[command(name = "sensecolor")]
#[command(version, long_about = None)]
struct Args {
    /// Sample log, one `<kind> <max_range> <timestamp> <values...>` per line
    input: PathBuf,

    /// Emit a JSON array instead of a text table
    #[arg(long)]
    json: bool,

    /// Write the report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON formatter config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run<R: SampleReader, W: ReadingWriter>(pipeline: &SampleReportPipeline<R, W>, args: &Args) -> Result<usize> {
    if let Some(output) = &args.output {
        return pipeline
            .convert_file(&args.input, output)
            .with_context(|| format!("converting {}", args.input.display()));
    }

    let input_data = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut stdout = std::io::stdout().lock();
    let count = pipeline.convert(&input_data, &mut stdout)?;
    stdout.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init();

    let config = match &args.config {
        Some(path) => FormatConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FormatConfig::default(),
    };
    info!("Raw layout: {} entries per line", config.raw_entries_per_line);
    info!("Exposure calibration: {}", config.exposure_calibration);

    let result = if args.json {
        run(&SampleReportPipeline::new_json(config), &args)
    } else {
        run(&SampleReportPipeline::new(config), &args)
    };

    match result {
        Ok(count) => {
            info!("Wrote {} readings", count);
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            Err(e)
        }
    }
}
