use crate::error::ScopeError;
use crate::time_series::TimeSeries;

/// Voltage summary of a trace.
///
/// Note that `average` is the midrange `(max + min) / 2`, not the arithmetic
/// mean of all samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub range: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl SummaryStatistics {
    pub fn summarize(series: &TimeSeries) -> Result<Self, ScopeError> {
        let mut voltages = series.voltages();
        let first = voltages.next().ok_or(ScopeError::EmptySeries)?;

        let (max, min) = voltages.fold((first, first), |(max, min), voltage| {
            (
                if voltage > max { voltage } else { max },
                if voltage < min { voltage } else { min },
            )
        });

        Ok(Self {
            range: max - min,
            average: (max + min) / 2.0,
            max,
            min,
        })
    }
}

impl std::fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range {:.4} V, average {:.4} V, max {:.4} V, min {:.4} V",
            self.range, self.average, self.max, self.min
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::RawSampleSequence;
    use crate::preamble::WaveformPreamble;

    fn series(raw: &str, sample_interval: f64, voltage_scale: f64) -> TimeSeries {
        let preamble = WaveformPreamble {
            bits_per_sample: None,
            encoding: "ASC".to_string(),
            point_count: None,
            summary: String::new(),
            sample_interval,
            voltage_scale,
        };
        TimeSeries::assemble(&preamble, &RawSampleSequence::decode(raw)).unwrap()
    }

    #[test]
    fn test_summarize_scenario() {
        let stats = SummaryStatistics::summarize(&series("1.0,2.0,3.0", 0.5, 2.0)).unwrap();
        assert_eq!(
            stats,
            SummaryStatistics {
                range: 4.0,
                average: 4.0,
                max: 6.0,
                min: 2.0,
            }
        );
    }

    #[test]
    fn test_average_is_midrange() {
        let stats = SummaryStatistics::summarize(&series("0,0,0,10", 1.0, 1.0)).unwrap();
        assert_eq!(stats.average, 5.0);
    }

    #[test]
    fn test_single_point() {
        let stats = SummaryStatistics::summarize(&series("-3", 1.0, 0.5)).unwrap();
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.average, -1.5);
        assert_eq!(stats.max, -1.5);
        assert_eq!(stats.min, -1.5);
    }

    #[test]
    fn test_min_after_max_update() {
        // Rises, then drops below the first sample.
        let stats = SummaryStatistics::summarize(&series("5,9,1", 1.0, 1.0)).unwrap();
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.range, 8.0);
    }

    #[test]
    fn test_empty_series() {
        let err = SummaryStatistics::summarize(&series("", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ScopeError::EmptySeries));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let trace = series("3,-4,7,0,2", 1e-3, 0.04);
        let first = SummaryStatistics::summarize(&trace).unwrap();
        let second = SummaryStatistics::summarize(&trace).unwrap();
        assert_eq!(first, second);
    }
}
