use anyhow::{Context, Result, bail};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::statistics::DEFAULT_PRECISION;

/// Widest precision the config layer accepts; beyond it `10^precision`
/// leaves the `f64` range.
pub const MAX_PRECISION: i32 = 308;

fn default_precision() -> i32 {
    DEFAULT_PRECISION
}

/// Settings for [`StatisticsEngine`](crate::statistics::StatisticsEngine).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_precision")]
    #[schemars(
        title = "Precision",
        description = "Decimal digits kept by truncation. Negative values truncate to the left of the decimal point.",
        default = "default_precision",
        range(min = -308, max = 308)
    )]
    pub precision: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl EngineConfig {
    pub fn schema() -> Schema {
        schema_for!(EngineConfig)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).context("engine config is not valid JSON")?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let config: Self =
            serde_json::from_value(value).context("invalid engine config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-MAX_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            bail!(
                "precision {} is outside -{MAX_PRECISION}..={MAX_PRECISION}",
                self.precision
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn precision_schema() -> Value {
        let v = serde_json::to_value(EngineConfig::schema()).expect("schema to JSON");
        v.get("properties")
            .and_then(|p| p.get("precision"))
            .cloned()
            .expect("precision property")
    }

    #[test]
    fn missing_precision_uses_default() {
        let c = EngineConfig::from_value(json!({})).unwrap();
        assert_eq!(c, EngineConfig::default());
        assert_eq!(c.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn parses_from_json_text() {
        let c = EngineConfig::from_json_str(r#"{"precision": 4}"#).unwrap();
        assert_eq!(c.precision, 4);

        let c = EngineConfig::from_json_str(r#"{"precision": -1}"#).unwrap();
        assert_eq!(c.precision, -1);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = EngineConfig::from_json_str("{precision: 4").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn rejects_unknown_fields_and_wrong_types() {
        assert!(EngineConfig::from_value(json!({"precision": 2, "rounding": "half-up"})).is_err());
        assert!(EngineConfig::from_value(json!({"precision": "two"})).is_err());
        assert!(EngineConfig::from_value(json!({"precision": 1.5})).is_err());
    }

    #[test]
    fn rejects_out_of_range_precision() {
        let err = EngineConfig::from_value(json!({"precision": 400})).unwrap_err();
        assert!(err.to_string().contains("outside"));
        assert!(EngineConfig::from_value(json!({"precision": -309})).is_err());
        assert!(EngineConfig::from_value(json!({"precision": i32::MIN})).is_err());
        assert!(EngineConfig::from_value(json!({"precision": 308})).is_ok());
    }

    #[test]
    fn schema_has_title_default_and_range() {
        let field = precision_schema();
        assert_eq!(field.get("title").and_then(Value::as_str), Some("Precision"));
        assert_eq!(field.get("default").and_then(Value::as_i64), Some(2));
        assert_eq!(field.get("minimum").and_then(Value::as_f64), Some(-308.0));
        assert_eq!(field.get("maximum").and_then(Value::as_f64), Some(308.0));
    }

    #[test]
    fn serializes_back_to_json() {
        let v = serde_json::to_value(EngineConfig { precision: 3 }).unwrap();
        assert_eq!(v, json!({"precision": 3}));
    }
}
