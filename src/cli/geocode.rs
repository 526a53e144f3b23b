//! Geocode command handler
//!
//! Resolves an address, free-form or structured, to locations.

use crate::config::Config;
use crate::constants::params::QUERY;
use crate::error::{Error, Result};
use crate::geo::{Params, Query};
use clap::Args;
use serde_json::Value;

/// Geocode command arguments
#[derive(Args)]
pub struct GeocodeArgs {
    /// Free-form address
    pub query: Option<String>,

    /// Structured search field or extra parameter (e.g. city=Hanoi)
    #[arg(long = "param", short = 'P', value_parser = super::parse_param_arg)]
    pub params: Vec<(String, Value)>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Provider (overrides config)
    #[arg(long, short = 'p')]
    pub provider: Option<String>,

    /// Output format: text, json or raw
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

impl GeocodeArgs {
    /// Plain text stays a text query; anything else becomes structured
    pub fn to_query(&self) -> Result<Query> {
        if self.params.is_empty() && self.limit.is_none() {
            return match &self.query {
                Some(text) => Ok(Query::Text(text.clone())),
                None => Err(Error::InvalidArgument(
                    "Nothing to geocode: give an address or --param fields".to_string(),
                )),
            };
        }

        let mut fields = Params::new();
        if let Some(text) = &self.query {
            fields.insert(QUERY.to_string(), Value::from(text.as_str()));
        }
        for (key, value) in &self.params {
            fields.insert(key.clone(), value.clone());
        }
        if let Some(limit) = self.limit {
            fields.insert("limit".to_string(), Value::from(limit));
        }

        Ok(Query::Structured(fields))
    }
}

/// Run the geocode command
pub async fn run(args: GeocodeArgs) -> Result<()> {
    let config = Config::load()?;
    let query = args.to_query()?;

    let geocoder = super::build_geocoder(&config, args.provider.as_deref())?;
    let results = geocoder.geocode(query)?.await?;

    super::print_results(&config, args.format.as_deref(), &results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(query: Option<&str>, params: Vec<(&str, Value)>, limit: Option<u32>) -> GeocodeArgs {
        GeocodeArgs {
            query: query.map(str::to_string),
            params: params.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            limit,
            provider: None,
            format: None,
        }
    }

    #[test]
    fn test_text_query() {
        let query = args(Some("Athens"), vec![], None).to_query().unwrap();
        assert_eq!(query, Query::Text("Athens".to_string()));
    }

    #[test]
    fn test_structured_query() {
        let query = args(None, vec![("city", json!("Hà Nội"))], Some(1))
            .to_query()
            .unwrap();
        assert_eq!(query, Query::structured([("city", json!("Hà Nội")), ("limit", json!(1))]));
    }

    #[test]
    fn test_text_with_limit_becomes_structured() {
        let query = args(Some("Athens"), vec![], Some(3)).to_query().unwrap();
        assert_eq!(query, Query::structured([("q", json!("Athens")), ("limit", json!(3))]));
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            args(None, vec![], None).to_query(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
