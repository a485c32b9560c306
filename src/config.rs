use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::fields::{FieldKey, MetricName, MetricSpec};
use crate::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    #[serde(default = "MetricSettings::defaults")]
    pub metrics: Vec<MetricSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

/// One tracked metric as written in a configuration file
///
/// Deployments that track more than production and overburden (say, a
/// stripping ratio) add entries here rather than forking the engine.
#[derive(Debug, Deserialize, Clone)]
pub struct MetricSettings {
    pub name: String,
    pub fact_per_day: String,
    pub plan_month: String,
    pub plan_per_day: String,
    pub fact_to_date: String,
    pub plan_to_date: String,
    pub deviation: String,
    pub percent_of_plan: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("COAL_REPORTS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Validated metric definitions for the aggregation engine
    pub fn metric_specs(&self) -> crate::Result<Vec<MetricSpec>> {
        self.metrics.iter().map(MetricSettings::to_spec).collect()
    }
}

impl MetricSettings {
    fn defaults() -> Vec<Self> {
        MetricSpec::defaults().iter().map(Self::from_spec).collect()
    }

    fn from_spec(spec: &MetricSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            fact_per_day: spec.fact_per_day.to_string(),
            plan_month: spec.plan_month.to_string(),
            plan_per_day: spec.plan_per_day.to_string(),
            fact_to_date: spec.fact_to_date.to_string(),
            plan_to_date: spec.plan_to_date.to_string(),
            deviation: spec.deviation.to_string(),
            percent_of_plan: spec.percent_of_plan.to_string(),
        }
    }

    fn to_spec(&self) -> crate::Result<MetricSpec> {
        let name = MetricName::try_new(self.name.clone()).map_err(|err| Error::InvalidMetric {
            name: self.name.clone(),
            reason: err.to_string(),
        })?;
        Ok(MetricSpec {
            name,
            fact_per_day: self.field(&self.fact_per_day)?,
            plan_month: self.field(&self.plan_month)?,
            plan_per_day: self.field(&self.plan_per_day)?,
            fact_to_date: self.field(&self.fact_to_date)?,
            plan_to_date: self.field(&self.plan_to_date)?,
            deviation: self.field(&self.deviation)?,
            percent_of_plan: self.field(&self.percent_of_plan)?,
        })
    }

    fn field(&self, raw: &str) -> crate::Result<FieldKey> {
        FieldKey::try_new(raw.to_string()).map_err(|err| Error::InvalidMetric {
            name: self.name.clone(),
            reason: format!("bad field key `{raw}`: {err}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn default_metrics_convert_to_valid_specs() {
        let settings = Settings::new().unwrap();
        let specs = settings.metric_specs().unwrap();
        assert_eq!(specs, MetricSpec::defaults());
    }

    #[test]
    fn bad_metric_names_are_rejected() {
        let mut bad = MetricSettings::defaults().remove(0);
        bad.name = "Not A Name".to_string();
        let settings = Settings {
            logging: LoggingSettings {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            metrics: vec![bad],
        };
        assert!(matches!(
            settings.metric_specs(),
            Err(Error::InvalidMetric { .. })
        ));
    }

    #[test]
    fn empty_field_keys_are_rejected() {
        let mut bad = MetricSettings::defaults().remove(0);
        bad.deviation = String::new();
        let settings = Settings {
            logging: LoggingSettings {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            metrics: vec![bad],
        };
        assert!(matches!(
            settings.metric_specs(),
            Err(Error::InvalidMetric { .. })
        ));
    }
}
