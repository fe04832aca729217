/// Unscaled `CURVE?` tokens in acquisition order.
///
/// Tokens are kept as text; numeric conversion happens when the series is
/// assembled, so a bad token is reported together with its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSampleSequence {
    tokens: Vec<String>,
}

impl RawSampleSequence {
    /// Split a comma-separated curve reply. An empty reply holds no samples.
    pub fn decode(response: &str) -> Self {
        if response.trim().is_empty() {
            return Self::default();
        }
        Self {
            tokens: response.split(',').map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawSampleSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tokens_in_order() {
        let samples = RawSampleSequence::decode("12,-7,0,127");
        assert_eq!(samples.tokens(), ["12", "-7", "0", "127"]);
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn test_decode_keeps_non_numeric_tokens() {
        let samples = RawSampleSequence::decode("1,abc,3");
        assert_eq!(samples.tokens(), ["1", "abc", "3"]);
    }

    #[test]
    fn test_decode_empty_response() {
        assert!(RawSampleSequence::decode("").is_empty());
        assert!(RawSampleSequence::decode("  ").is_empty());
    }

    #[test]
    fn test_collect_from_strs() {
        let samples: RawSampleSequence = ["1.0", "2.0"].into_iter().collect();
        assert_eq!(samples, RawSampleSequence::decode("1.0,2.0"));
    }
}
