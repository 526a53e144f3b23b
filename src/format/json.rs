//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::ResultSet;

/// JSON formatter - normalized results, or the raw provider payload
pub struct JsonFormatter {
    /// Emit the provider response instead of normalized results
    pub raw: bool,
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.raw {
            "raw"
        } else {
            "json"
        }
    }

    fn description(&self) -> &str {
        if self.raw {
            "Provider response as received"
        } else {
            "Normalized results as JSON"
        }
    }

    fn format(&self, results: &ResultSet) -> Result<String> {
        if self.raw {
            Ok(serde_json::to_string_pretty(results.raw())?)
        } else {
            Ok(serde_json::to_string_pretty(&**results)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Location;
    use serde_json::json;

    fn results() -> ResultSet {
        let location = Location {
            latitude: 37.9755648,
            longitude: 23.7348324,
            formatted_address: "Athens, Greece".to_string(),
            country_code: "GR".to_string(),
            ..Default::default()
        };
        ResultSet::new(vec![location], json!([{"lat": "37.9755648", "lon": "23.7348324"}]))
    }

    #[test]
    fn test_json_format() {
        let output = JsonFormatter { raw: false }.format(&results()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["countryCode"], "GR");
        assert_eq!(parsed[0]["province"], "");
    }

    #[test]
    fn test_raw_format() {
        let output = JsonFormatter { raw: true }.format(&results()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!([{"lat": "37.9755648", "lon": "23.7348324"}]));
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter { raw: false }.name(), "json");
        assert_eq!(JsonFormatter { raw: true }.name(), "raw");
    }
}
