// Data acquisition example
//
// This example runs the full acquisition (preamble, curve, scaling), prints
// the summary statistics and hands the trace over as a DataFrame, which is
// what a plotting front end would consume.

use clap::Parser;
use scpi_scope::{ScpiScope, SerialConfig};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Acquire a voltage-vs-time trace from a SCPI oscilloscope")]
struct Args {
    /// Serial port of the instrument
    #[arg(short, long, default_value = "COM3")]
    port: String,

    /// Baud rate
    #[arg(short, long, default_value_t = 9600)]
    baud: u32,

    /// Read timeout in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Fail when the curve length differs from the preamble's point count
    #[arg(long)]
    strict: bool,

    /// Number of rows of the trace to print
    #[arg(long, default_value_t = 10)]
    rows: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = SerialConfig::new(args.port)
        .with_baud_rate(args.baud)
        .with_timeout(Duration::from_millis(args.timeout_ms));
    let mut scope = ScpiScope::open(config).strict_point_count(args.strict);

    println!("===========================");
    println!("=Starting Data Acquisition=");
    println!("===========================");

    let (series, statistics) = scope.acquire_with_statistics()?;
    println!("Captured {} samples", series.len());
    println!("{statistics}");

    let df = series.to_dataframe()?;
    println!("{}", df.head(Some(args.rows)));

    Ok(())
}
