// Instrument identification example
//
// This example asks the instrument who it is and prints the decoded reply.

use clap::Parser;
use scpi_scope::{ScpiScope, SerialConfig};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Print the identification of a SCPI oscilloscope")]
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
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = SerialConfig::new(args.port)
        .with_baud_rate(args.baud)
        .with_timeout(Duration::from_millis(args.timeout_ms));
    let mut scope = ScpiScope::open(config);

    let id = scope.identify()?;
    println!("Brand:              {}", id.brand);
    println!("Model:              {}", id.model);
    println!("Calibration factor: {}", id.calibration_factor);
    println!("Firmware version:   {}", id.firmware_version);
    println!("Comm module:        {}", id.comm_module);

    Ok(())
}
