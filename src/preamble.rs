use crate::error::ScopeError;
use crate::scpi_command::ScpiQuery;

const QUERY: &str = ScpiQuery::WaveformPreamble.as_str();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreambleField {
    BitsPerSample,
    Encoding,
    PointCount,
    Summary,
    SampleInterval,
    VoltageScale,
}

/// Position of each field in the semicolon-separated `WFMPRE?` reply.
///
/// The reply carries no field names, so this table is the whole contract.
/// Entries are applied in order: the bits-per-sample value at index 10
/// replaces the one read from index 1.
const PREAMBLE_LAYOUT: [(usize, PreambleField); 7] = [
    (1, PreambleField::BitsPerSample),
    (2, PreambleField::Encoding),
    (5, PreambleField::PointCount),
    (6, PreambleField::Summary),
    (8, PreambleField::SampleInterval),
    (10, PreambleField::BitsPerSample),
    (12, PreambleField::VoltageScale),
];

/// Fewest fields a reply may have for every index in [`PREAMBLE_LAYOUT`] to exist.
pub const PREAMBLE_MIN_FIELDS: usize = 13;

/// Metadata describing how to turn the raw curve into volts and seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformPreamble {
    /// `None` when the field is not an integer
    pub bits_per_sample: Option<u32>,
    pub encoding: String,
    /// `None` when the field is not an integer
    pub point_count: Option<usize>,
    pub summary: String,
    /// Seconds between consecutive samples
    pub sample_interval: f64,
    /// Volts per raw unit
    pub voltage_scale: f64,
}

#[derive(Default)]
struct PartialPreamble {
    bits_per_sample: Option<u32>,
    encoding: String,
    point_count: Option<usize>,
    summary: String,
    sample_interval: Option<f64>,
    voltage_scale: Option<f64>,
}

impl WaveformPreamble {
    pub fn decode(response: &str) -> Result<Self, ScopeError> {
        let fields: Vec<&str> = response.split(';').collect();
        if fields.len() < PREAMBLE_MIN_FIELDS {
            return Err(ScopeError::malformed(
                QUERY,
                format!(
                    "expected at least {PREAMBLE_MIN_FIELDS} semicolon-separated fields, got {}",
                    fields.len()
                ),
            ));
        }

        let mut partial = PartialPreamble::default();
        for (index, field) in PREAMBLE_LAYOUT {
            let text = fields[index].trim();
            match field {
                PreambleField::BitsPerSample => partial.bits_per_sample = parse_integer(index, text),
                PreambleField::Encoding => partial.encoding = text.to_string(),
                PreambleField::PointCount => partial.point_count = parse_integer(index, text),
                PreambleField::Summary => partial.summary = text.to_string(),
                PreambleField::SampleInterval => {
                    partial.sample_interval = Some(parse_float(index, text)?);
                }
                PreambleField::VoltageScale => {
                    partial.voltage_scale = Some(parse_float(index, text)?);
                }
            }
        }

        let (Some(sample_interval), Some(voltage_scale)) =
            (partial.sample_interval, partial.voltage_scale)
        else {
            return Err(ScopeError::malformed(
                QUERY,
                "layout is missing the interval or scale field",
            ));
        };

        Ok(Self {
            bits_per_sample: partial.bits_per_sample,
            encoding: partial.encoding,
            point_count: partial.point_count,
            summary: partial.summary,
            sample_interval,
            voltage_scale,
        })
    }
}

fn parse_integer<T: std::str::FromStr>(index: usize, text: &str) -> Option<T> {
    let value = text.parse().ok();
    if value.is_none() {
        log::debug!("Preamble field {} is not an integer: '{}'", index, text);
    }
    value
}

fn parse_float(index: usize, text: &str) -> Result<f64, ScopeError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ScopeError::malformed(
            QUERY,
            format!("field {index} is not a finite number: '{text}'"),
        )),
    }
}
