use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jetstress::pipeline::decode::{decode, SampleFormat};
use jetstress::pipeline::export::{csv_sibling_path, write_csv};

/// Convert a raw binary capture to a CSV of decoded sample values.
#[derive(Parser, Debug)]
#[command(name = "jetstress", version, about = "Convert binary ADC capture data to CSV")]
struct Args {
    /// Binary data file
    file: PathBuf,
    /// Sample width in bytes (1, 2, 4, or 8)
    #[arg(long, default_value_t = 2)]
    width: usize,
    /// Output path; defaults to a sibling .CSV next to the input
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let format = SampleFormat::from_width(args.width)?;
    let bytes = fs::read(&args.file)
        .with_context(|| format!("reading capture {}", args.file.display()))?;
    let samples = decode(&bytes, format);

    let output = args
        .output
        .unwrap_or_else(|| csv_sibling_path(&args.file));
    write_csv(&samples, &output).with_context(|| format!("writing {}", output.display()))?;

    println!("{} samples -> {}", samples.len(), output.display());
    Ok(())
}
