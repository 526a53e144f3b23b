//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{Location, ResultSet};

/// Text formatter - one block per result
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, results: &ResultSet) -> Result<String> {
        if results.is_empty() {
            return Ok("No results\n".to_string());
        }

        let mut output = String::new();
        for (i, location) in results.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}\n",
                i + 1,
                display_name(location)
            ));
            output.push_str(&format!(
                "   ({:.6}, {:.6})\n",
                location.latitude, location.longitude
            ));

            let street = [location.street_number.as_str(), location.street_name.as_str()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            let locality = [
                street.as_str(),
                location.quarter.as_str(),
                location.suburb.as_str(),
                location.city.as_str(),
                location.province.as_str(),
                location.zipcode.as_str(),
            ]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

            if !locality.is_empty() {
                output.push_str(&format!("   {}\n", locality));
            }
            if !location.country.is_empty() {
                output.push_str(&format!(
                    "   {} [{}]\n",
                    location.country, location.country_code
                ));
            }
        }

        Ok(output)
    }
}

fn display_name(location: &Location) -> &str {
    if location.formatted_address.is_empty() {
        "(unnamed)"
    } else {
        &location.formatted_address
    }
}
