/// The queries this crate sends. Each is answered with a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScpiQuery {
    Identify,
    WaveformPreamble,
    Curve,
}

impl ScpiQuery {
    /// Command text without the newline terminator, which the transport adds.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identify => "*IDN?",
            Self::WaveformPreamble => "WFMPRE?",
            Self::Curve => "CURVE?",
        }
    }
}

impl std::fmt::Display for ScpiQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
