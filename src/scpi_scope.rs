use crate::curve::RawSampleSequence;
use crate::error::ScopeError;
use crate::identification::IdentificationRecord;
use crate::preamble::WaveformPreamble;
use crate::scpi_command::ScpiQuery;
use crate::serial_terminal::{ScpiTransport, SerialConfig, SerialTerminal};
use crate::statistics::SummaryStatistics;
use crate::time_series::TimeSeries;

/// Oscilloscope reached through a [`ScpiTransport`].
///
/// Every method issues its queries one after another and either returns a
/// complete result or an error; nothing is cached between calls.
pub struct ScpiScope<T: ScpiTransport = SerialTerminal> {
    transport: T,
    strict_point_count: bool,
}

impl ScpiScope<SerialTerminal> {
    /// Talk to an instrument on a serial port. The port is opened per query.
    pub fn open(config: SerialConfig) -> Self {
        log::debug!(
            "Using SCPI instrument on {} at {} baud",
            config.port,
            config.baud_rate
        );
        Self::new(SerialTerminal::new(config))
    }
}

impl<T: ScpiTransport> ScpiScope<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            strict_point_count: false,
        }
    }

    /// Fail acquisitions whose curve length differs from the preamble's point
    /// count instead of logging a warning.
    pub fn strict_point_count(mut self, strict: bool) -> Self {
        self.strict_point_count = strict;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn query(&mut self, query: ScpiQuery) -> Result<String, ScopeError> {
        let response = self.transport.query(query.as_str())?;
        log::debug!("{} returned {} bytes", query, response.len());
        Ok(response)
    }

    pub fn identify(&mut self) -> Result<IdentificationRecord, ScopeError> {
        let response = self.query(ScpiQuery::Identify)?;
        let record = IdentificationRecord::decode(&response)?;
        log::debug!("Instrument: {} {}", record.brand, record.model);
        Ok(record)
    }

    pub fn read_preamble(&mut self) -> Result<WaveformPreamble, ScopeError> {
        log::info!("Loading waveform details...");
        let response = self.query(ScpiQuery::WaveformPreamble)?;
        let preamble = WaveformPreamble::decode(&response)?;
        log::info!("Waveform details loaded.");
        Ok(preamble)
    }

    pub fn read_curve(&mut self) -> Result<RawSampleSequence, ScopeError> {
        log::info!("Loading voltage levels...");
        let response = self.query(ScpiQuery::Curve)?;
        let samples = RawSampleSequence::decode(&response);
        log::info!("Voltage levels loaded.");
        Ok(samples)
    }

    /// Fetch the preamble, then the curve, and scale the curve into a trace.
    pub fn acquire(&mut self) -> Result<TimeSeries, ScopeError> {
        log::info!("Starting data acquisition");
        let preamble = self.read_preamble()?;
        let samples = self.read_curve()?;

        if self.strict_point_count {
            TimeSeries::assemble_strict(&preamble, &samples)
        } else {
            TimeSeries::assemble(&preamble, &samples)
        }
    }

    pub fn acquire_with_statistics(
        &mut self,
    ) -> Result<(TimeSeries, SummaryStatistics), ScopeError> {
        let series = self.acquire()?;
        let statistics = SummaryStatistics::summarize(&series)?;
        Ok((series, statistics))
    }
}
