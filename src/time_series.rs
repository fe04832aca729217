use crate::curve::RawSampleSequence;
use crate::error::ScopeError;
use crate::preamble::WaveformPreamble;
use polars::prelude::*;

pub const TIME_COLUMN_NAME: &str = "time";
pub const VOLTAGE_COLUMN_NAME: &str = "voltage";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Seconds since the first sample
    pub time: f64,
    /// Volts
    pub voltage: f64,
}

/// Scaled voltage trace, ordered by strictly increasing time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<SamplePoint>,
}

impl TimeSeries {
    /// Scale raw samples into volts and give each one a timestamp.
    ///
    /// The first sample sits at t = 0 and each following timestamp adds the
    /// sample interval to the previous one, so floating point drift over long
    /// captures is reproducible rather than corrected.
    ///
    /// A sample count that differs from the preamble's point count is logged
    /// and otherwise ignored; see [`TimeSeries::assemble_strict`].
    pub fn assemble(
        preamble: &WaveformPreamble,
        samples: &RawSampleSequence,
    ) -> Result<Self, ScopeError> {
        Self::build(preamble, samples, false)
    }

    /// Like [`TimeSeries::assemble`], but a sample count that differs from the
    /// preamble's point count is an error.
    pub fn assemble_strict(
        preamble: &WaveformPreamble,
        samples: &RawSampleSequence,
    ) -> Result<Self, ScopeError> {
        Self::build(preamble, samples, true)
    }

    fn build(
        preamble: &WaveformPreamble,
        samples: &RawSampleSequence,
        strict_point_count: bool,
    ) -> Result<Self, ScopeError> {
        check_scaling(preamble)?;

        match check_point_count(preamble, samples) {
            Err(e) if strict_point_count => return Err(e),
            Err(ScopeError::SampleCountMismatch { declared, actual }) => {
                log::warn!(
                    "Preamble declares {} points but the curve holds {}",
                    declared,
                    actual
                );
            }
            _ => {}
        }

        let mut points = Vec::with_capacity(samples.len());
        let mut time: f64 = 0.0;
        for (index, token) in samples.tokens().iter().enumerate() {
            let raw = parse_sample(index, token)?;

            // Overflow in either value rejects the whole trace.
            let voltage = raw * preamble.voltage_scale;
            if !voltage.is_finite() {
                return Err(ScopeError::MalformedSample {
                    index,
                    token: token.to_string(),
                });
            }
            if !time.is_finite() {
                return Err(ScopeError::IncompatiblePreamble {
                    reason: format!(
                        "time of sample {index} overflows with interval {}",
                        preamble.sample_interval
                    ),
                });
            }

            points.push(SamplePoint { time, voltage });
            time += preamble.sample_interval;
        }

        log::debug!(
            "Assembled {} points at {} s/sample, {} V/unit",
            points.len(),
            preamble.sample_interval,
            preamble.voltage_scale
        );
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    pub fn voltages(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.voltage)
    }

    /// Two-column frame (`time`, `voltage`) for plotting or further analysis.
    pub fn to_dataframe(&self) -> Result<DataFrame, PolarsError> {
        df!(
            TIME_COLUMN_NAME => self.times().collect::<Vec<f64>>(),
            VOLTAGE_COLUMN_NAME => self.voltages().collect::<Vec<f64>>()
        )
    }

    pub fn to_lazy_frame(&self) -> Result<LazyFrame, PolarsError> {
        Ok(self.to_dataframe()?.lazy())
    }
}

fn check_scaling(preamble: &WaveformPreamble) -> Result<(), ScopeError> {
    if !(preamble.sample_interval.is_finite() && preamble.sample_interval > 0.0) {
        return Err(ScopeError::IncompatiblePreamble {
            reason: format!(
                "sample interval must be positive, got {}",
                preamble.sample_interval
            ),
        });
    }
    if !preamble.voltage_scale.is_finite() {
        return Err(ScopeError::IncompatiblePreamble {
            reason: format!(
                "voltage scale must be finite, got {}",
                preamble.voltage_scale
            ),
        });
    }
    Ok(())
}

fn check_point_count(
    preamble: &WaveformPreamble,
    samples: &RawSampleSequence,
) -> Result<(), ScopeError> {
    match preamble.point_count {
        Some(declared) if declared != samples.len() => Err(ScopeError::SampleCountMismatch {
            declared,
            actual: samples.len(),
        }),
        _ => Ok(()),
    }
}

fn parse_sample(index: usize, token: &str) -> Result<f64, ScopeError> {
    match token.trim().parse::<f64>() {
        Ok(raw) if raw.is_finite() => Ok(raw),
        _ => Err(ScopeError::MalformedSample {
            index,
            token: token.to_string(),
        }),
    }
}
