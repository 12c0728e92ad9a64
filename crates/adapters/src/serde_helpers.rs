//! Deserializers for loosely typed upstream payloads

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
	Number(f64),
	Text(String),
}

/// Accept `12.5`, `"12.5"`, `null` or a missing field
///
/// Empty strings count as missing; any other non-numeric string is an error.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<NumberOrString>::deserialize(deserializer)? {
		None => Ok(None),
		Some(NumberOrString::Number(n)) => Ok(Some(n)),
		Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
		Some(NumberOrString::Text(s)) => s
			.trim()
			.parse::<f64>()
			.map(Some)
			.map_err(|_| D::Error::custom(format!("expected a number, got '{}'", s))),
	}
}

/// `None` for missing, null or blank strings
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Deserialize)]
	struct Probe {
		#[serde(default, deserialize_with = "lenient_f64")]
		value: Option<f64>,
	}

	fn probe(json: &str) -> Result<Option<f64>, serde_json::Error> {
		serde_json::from_str::<Probe>(json).map(|p| p.value)
	}

	#[test]
	fn test_lenient_f64() {
		assert_eq!(probe(r#"{"value": 3.5}"#).unwrap(), Some(3.5));
		assert_eq!(probe(r#"{"value": "99500000"}"#).unwrap(), Some(99_500_000.0));
		assert_eq!(probe(r#"{"value": null}"#).unwrap(), None);
		assert_eq!(probe(r#"{"value": ""}"#).unwrap(), None);
		assert_eq!(probe(r#"{}"#).unwrap(), None);
		assert!(probe(r#"{"value": "lots"}"#).is_err());
	}

	#[test]
	fn test_non_empty() {
		assert_eq!(non_empty(Some("0xabc")), Some("0xabc"));
		assert_eq!(non_empty(Some("  ")), None);
		assert_eq!(non_empty(None), None);
	}
}
