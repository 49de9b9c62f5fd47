//! Scenario files: the calculator inputs as a TOML document.
//!
//! Every section and key is optional and falls back to the calculator's
//! defaults. Values are kept wide (signed integers, raw floats) so that
//! out-of-range entries reach [`validation`] and are reported, instead of
//! failing deserialization with a less useful message.

mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::core::{LegacyToolCosts, RoiInputs, ToolCategory};
use crate::errors::RoiError;

pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_config, user_config_path,
    ConfigSource, LoadedConfig, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result, RoiValidation};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    #[serde(default)]
    pub practice: PracticeConfig,
    #[serde(default)]
    pub financials: FinancialsConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub legacy_tools: LegacyToolCosts,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PracticeConfig {
    /// Unset means 5, or 1 for a solo practice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<i64>,
    #[serde(default = "default_clinics")]
    pub clinics: i64,
    #[serde(default)]
    pub solo: bool,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            providers: None,
            clinics: default_clinics(),
            solo: false,
        }
    }
}

fn default_clinics() -> i64 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialsConfig {
    #[serde(default = "default_annual_revenue")]
    pub annual_revenue_per_provider: f64,
    #[serde(default = "default_denial_rate")]
    pub denial_rate_percent: f64,
    #[serde(default = "default_doc_hours")]
    pub daily_doc_hours: f64,
}

impl Default for FinancialsConfig {
    fn default() -> Self {
        Self {
            annual_revenue_per_provider: default_annual_revenue(),
            denial_rate_percent: default_denial_rate(),
            daily_doc_hours: default_doc_hours(),
        }
    }
}

fn default_annual_revenue() -> f64 {
    RoiInputs::default().annual_revenue_per_provider
}

fn default_denial_rate() -> f64 {
    RoiInputs::default().current_denial_rate_percent
}

fn default_doc_hours() -> f64 {
    RoiInputs::default().daily_doc_hours_per_provider
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    #[serde(default = "default_price")]
    pub price_per_provider: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_provider: default_price(),
        }
    }
}

fn default_price() -> f64 {
    RoiInputs::default().product_monthly_price_per_provider
}

/// Command-line replacements for individual scenario values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputOverrides {
    pub providers: Option<i64>,
    pub clinics: Option<i64>,
    pub solo: Option<bool>,
    pub annual_revenue_per_provider: Option<f64>,
    pub denial_rate_percent: Option<f64>,
    pub daily_doc_hours: Option<f64>,
    pub price_per_provider: Option<f64>,
    pub tool_costs: Vec<(ToolCategory, f64)>,
}

impl InputOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RoiConfig {
    /// Later values win; the receiver is left untouched.
    pub fn with_overrides(&self, overrides: &InputOverrides) -> RoiConfig {
        let mut config = self.clone();
        if let Some(providers) = overrides.providers {
            config.practice.providers = Some(providers);
        }
        if let Some(clinics) = overrides.clinics {
            config.practice.clinics = clinics;
        }
        if let Some(solo) = overrides.solo {
            config.practice.solo = solo;
        }
        if let Some(revenue) = overrides.annual_revenue_per_provider {
            config.financials.annual_revenue_per_provider = revenue;
        }
        if let Some(rate) = overrides.denial_rate_percent {
            config.financials.denial_rate_percent = rate;
        }
        if let Some(hours) = overrides.daily_doc_hours {
            config.financials.daily_doc_hours = hours;
        }
        if let Some(price) = overrides.price_per_provider {
            config.pricing.price_per_provider = price;
        }
        for (category, cost) in &overrides.tool_costs {
            config.legacy_tools.set(*category, *cost);
        }
        config
    }

    /// Provider count after applying the solo-practice rule.
    pub fn effective_providers(&self) -> i64 {
        match (self.practice.providers, self.practice.solo) {
            (Some(providers), _) => providers,
            (None, true) => 1,
            (None, false) => i64::from(RoiInputs::default().provider_count),
        }
    }

    pub fn to_toml(&self) -> Result<String, RoiError> {
        toml::to_string_pretty(self)
            .map_err(|e| RoiError::output(format!("failed to render scenario: {e}")))
    }
}

impl From<&RoiInputs> for RoiConfig {
    fn from(inputs: &RoiInputs) -> Self {
        RoiConfig {
            practice: PracticeConfig {
                providers: Some(i64::from(inputs.provider_count)),
                clinics: i64::from(inputs.clinic_count),
                solo: inputs.solo_practice,
            },
            financials: FinancialsConfig {
                annual_revenue_per_provider: inputs.annual_revenue_per_provider,
                denial_rate_percent: inputs.current_denial_rate_percent,
                daily_doc_hours: inputs.daily_doc_hours_per_provider,
            },
            pricing: PricingConfig {
                price_per_provider: inputs.product_monthly_price_per_provider,
            },
            legacy_tools: inputs.legacy_tool_costs,
        }
    }
}

/// Parse a `KEY=VALUE` tool cost override such as `ehr=275`.
pub fn parse_tool_cost(arg: &str) -> Result<(ToolCategory, f64), RoiError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| RoiError::config_invalid(format!("expected KEY=VALUE, got '{arg}'")))?;
    let category = key.parse::<ToolCategory>().map_err(RoiError::config_invalid)?;
    let cost = value.trim().parse::<f64>().map_err(|e| {
        RoiError::config_invalid(format!(
            "invalid cost '{}' for {}: {}",
            value.trim(),
            category,
            e
        ))
    })?;
    Ok((category, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_default() {
        let config: RoiConfig = toml::from_str("").unwrap();
        assert_eq!(config, RoiConfig::default());
        assert_eq!(config.effective_providers(), 5);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: RoiConfig = toml::from_str(indoc! {r#"
            [practice]
            providers = 12

            [legacy_tools]
            ehr = 410
        "#})
        .unwrap();

        assert_eq!(config.effective_providers(), 12);
        assert_eq!(config.practice.clinics, 1);
        assert_eq!(config.legacy_tools.ehr, 410.0);
        assert_eq!(config.legacy_tools.crm, 150.0);
        assert_eq!(config.financials, FinancialsConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = toml::from_str::<RoiConfig>(indoc! {r#"
            [pricing]
            price = 300
        "#});
        assert!(result.is_err());
    }

    #[test]
    fn test_solo_without_providers_means_one() {
        let config: RoiConfig = toml::from_str("[practice]\nsolo = true\n").unwrap();
        assert_eq!(config.effective_providers(), 1);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let overrides = InputOverrides {
            providers: Some(20),
            denial_rate_percent: Some(12.0),
            tool_costs: vec![(ToolCategory::Lms, 0.0)],
            ..InputOverrides::default()
        };
        let config = RoiConfig::default().with_overrides(&overrides);

        assert_eq!(config.practice.providers, Some(20));
        assert_eq!(config.financials.denial_rate_percent, 12.0);
        assert_eq!(config.financials.daily_doc_hours, 2.5);
        assert_eq!(config.legacy_tools.lms, 0.0);
        assert!(InputOverrides::default().is_empty());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_toml_round_trip_of_inputs() {
        let config = RoiConfig::from(&RoiInputs::default());
        let rendered = config.to_toml().unwrap();
        let parsed: RoiConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_tool_cost() {
        assert_eq!(parse_tool_cost("ehr=275").unwrap(), (ToolCategory::Ehr, 275.0));
        assert_eq!(
            parse_tool_cost("Billing= 180.5").unwrap(),
            (ToolCategory::Billing, 180.5)
        );
    }

    #[test]
    fn test_bad_tool_cost_syntax_is_config_invalid() {
        for arg in ["ehr", "ehr=lots", "payroll=10"] {
            let err = parse_tool_cost(arg).unwrap_err();
            assert_eq!(err.code(), ErrorCode::CONFIG_INVALID, "{arg}");
            assert!(err.is_user_fixable());
        }
        assert!(parse_tool_cost("payroll=10")
            .unwrap_err()
            .to_string()
            .contains("unknown tool category 'payroll'"));
    }
}
