use crate::error::ScopeError;
use crate::scpi_command::ScpiQuery;

const QUERY: &str = ScpiQuery::Identify.as_str();

/// Decoded reply to `*IDN?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationRecord {
    pub brand: String,
    pub model: String,
    pub calibration_factor: String,
    pub firmware_version: String,
    pub comm_module: String,
}

impl IdentificationRecord {
    /// Decode `brand,model,<ignored>,CAL:<factor> FW:<version> <module>[,...]`.
    pub fn decode(response: &str) -> Result<Self, ScopeError> {
        let fields: Vec<&str> = response.split(',').collect();
        if fields.len() < 4 {
            return Err(ScopeError::malformed(
                QUERY,
                format!("expected at least 4 comma-separated fields, got {}", fields.len()),
            ));
        }

        let details: Vec<&str> = fields[3].split_whitespace().collect();
        if details.len() < 3 {
            return Err(ScopeError::malformed(
                QUERY,
                format!(
                    "expected 3 space-separated tokens in '{}', got {}",
                    fields[3],
                    details.len()
                ),
            ));
        }

        Ok(Self {
            brand: fields[0].to_string(),
            model: fields[1].to_string(),
            calibration_factor: tagged_value(details[0])?.to_string(),
            firmware_version: tagged_value(details[1])?.to_string(),
            comm_module: details[2].to_string(),
        })
    }
}

/// Value of a `TAG:value` token, up to any further colon. `TAG:` yields an
/// empty value.
fn tagged_value(token: &str) -> Result<&str, ScopeError> {
    token
        .split(':')
        .nth(1)
        .ok_or_else(|| ScopeError::malformed(QUERY, format!("token '{token}' has no ':'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_identification() {
        let record = IdentificationRecord::decode("B,M,X,CAL:1.0 FW:2.0 COMM").unwrap();
        assert_eq!(
            record,
            IdentificationRecord {
                brand: "B".to_string(),
                model: "M".to_string(),
                calibration_factor: "1.0".to_string(),
                firmware_version: "2.0".to_string(),
                comm_module: "COMM".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_realistic_identification() {
        let record =
            IdentificationRecord::decode("TEKTRONIX,TDS 1002,0,CAL:91.1CT FW:v22.11 TDS2CM:CMV:v1.04")
                .unwrap();
        assert_eq!(record.brand, "TEKTRONIX");
        assert_eq!(record.model, "TDS 1002");
        assert_eq!(record.calibration_factor, "91.1CT");
        assert_eq!(record.firmware_version, "v22.11");
        assert_eq!(record.comm_module, "TDS2CM:CMV:v1.04");
    }

    #[test]
    fn test_too_few_fields() {
        let err = IdentificationRecord::decode("B,M,X").unwrap_err();
        assert!(matches!(err, ScopeError::MalformedResponse { query: "*IDN?", .. }));
    }

    #[test]
    fn test_too_few_detail_tokens() {
        let err = IdentificationRecord::decode("B,M,X,CAL:1.0 FW:2.0").unwrap_err();
        assert!(matches!(err, ScopeError::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_tagged_values() {
        let record = IdentificationRecord::decode("B,M,X,CAL: FW: COMM").unwrap();
        assert_eq!(record.calibration_factor, "");
        assert_eq!(record.firmware_version, "");
        assert_eq!(record.comm_module, "COMM");
    }

    #[test]
    fn test_missing_colon() {
        assert!(matches!(
            IdentificationRecord::decode("B,M,X,CAL1.0 FW:2.0 COMM"),
            Err(ScopeError::MalformedResponse { .. })
        ));
        assert!(matches!(
            IdentificationRecord::decode("B,M,X,CAL:1.0 FW2.0 COMM"),
            Err(ScopeError::MalformedResponse { .. })
        ));
    }
}
