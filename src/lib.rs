//! # SCPI Scope
//!
//! A Rust library for acquiring voltage-vs-time traces from oscilloscopes that
//! speak a SCPI-style text protocol over a serial link.
//!
//! The instrument is asked three questions: who it is (`*IDN?`), how its
//! waveform is laid out (`WFMPRE?`) and what the raw samples are (`CURVE?`).
//! The replies are decoded by fixed position, the raw samples are scaled into
//! volts with synthesized timestamps, and the trace can be summarized.
//!
//! ## Features
//!
//! - **Connect-per-query serial transport**: Uses `serialport`, configured by an explicit [`SerialConfig`]
//! - **Positional decoders**: Identification, waveform preamble and raw curve replies
//! - **Unit scaling**: Raw samples to a [`TimeSeries`] of seconds and volts
//! - **Summary statistics**: Range, midrange average, maximum and minimum
//! - **DataFrame output**: Uses `polars` for handing traces to plotting or analysis code
//!
//! ## Examples
//!
//! ### Acquiring a Trace
//!
//! ```rust,no_run
//! use scpi_scope::{ScpiScope, SerialConfig};
//! use std::time::Duration;
//!
//! let config = SerialConfig::new("/dev/ttyUSB0")
//!     .with_baud_rate(9600)
//!     .with_timeout(Duration::from_secs(1));
//! let mut scope = ScpiScope::open(config);
//!
//! let id = scope.identify()?;
//! println!("Connected to {} {}", id.brand, id.model);
//!
//! let (series, statistics) = scope.acquire_with_statistics()?;
//! println!("Captured {} samples: {}", series.len(), statistics);
//!
//! let df = series.to_dataframe()?;
//! println!("{}", df.head(Some(5)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Decoding Replies Without an Instrument
//!
//! ```rust
//! use scpi_scope::{RawSampleSequence, SummaryStatistics, TimeSeries, WaveformPreamble};
//!
//! let preamble = WaveformPreamble::decode("1;8;ASC;RP;MSB;3;\"Ch1\";Y;0.5;0;8;\"s\";2.0")?;
//! let samples = RawSampleSequence::decode("1.0,2.0,3.0");
//!
//! let series = TimeSeries::assemble(&preamble, &samples)?;
//! assert_eq!(series.voltages().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
//!
//! let statistics = SummaryStatistics::summarize(&series)?;
//! assert_eq!(statistics.range, 4.0);
//! assert_eq!(statistics.average, 4.0); // midrange, not the mean
//! # Ok::<(), scpi_scope::ScopeError>(())
//! ```

pub mod curve;
pub mod error;
pub mod identification;
pub mod preamble;
pub mod scpi_command;
pub mod scpi_scope;
pub mod serial_terminal;
pub mod statistics;
pub mod time_series;

// Re-export the main types for convenience
pub use curve::RawSampleSequence;
pub use error::ScopeError;
pub use identification::IdentificationRecord;
pub use preamble::WaveformPreamble;
pub use scpi_command::ScpiQuery;
pub use scpi_scope::ScpiScope;
pub use serial_terminal::{ScpiTransport, SerialConfig, SerialTerminal, TerminalError};
pub use statistics::SummaryStatistics;
pub use time_series::{SamplePoint, TimeSeries};
