//! The eight software tool categories a practice pays for today.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One category of the legacy tool stack.
///
/// The declaration order is the canonical order used for every summation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Ehr,
    Scheduling,
    Crm,
    Billing,
    Hr,
    Lms,
    Inventory,
    Analytics,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 8] = [
        ToolCategory::Ehr,
        ToolCategory::Scheduling,
        ToolCategory::Crm,
        ToolCategory::Billing,
        ToolCategory::Hr,
        ToolCategory::Lms,
        ToolCategory::Inventory,
        ToolCategory::Analytics,
    ];

    /// Key used in scenario files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ToolCategory::Ehr => "ehr",
            ToolCategory::Scheduling => "scheduling",
            ToolCategory::Crm => "crm",
            ToolCategory::Billing => "billing",
            ToolCategory::Hr => "hr",
            ToolCategory::Lms => "lms",
            ToolCategory::Inventory => "inventory",
            ToolCategory::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Ehr => "EHR System",
            ToolCategory::Scheduling => "Scheduling",
            ToolCategory::Crm => "CRM/BD",
            ToolCategory::Billing => "Billing/Claims",
            ToolCategory::Hr => "HR/Credentialing",
            ToolCategory::Lms => "Training/LMS",
            ToolCategory::Inventory => "Inventory Mgmt",
            ToolCategory::Analytics => "Analytics/Reporting",
        }
    }

    /// Whether the competitor platform covers this category.
    ///
    /// Fixed policy: only CRM and analytics are replaced (2 of 8).
    pub fn replaced_by_competitor(self) -> bool {
        matches!(self, ToolCategory::Crm | ToolCategory::Analytics)
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ToolCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| {
                let keys: Vec<_> = ToolCategory::ALL.iter().map(|c| c.key()).collect();
                format!(
                    "unknown tool category '{}' (expected one of: {})",
                    s,
                    keys.join(", ")
                )
            })
    }
}

/// Monthly per-user cost of each legacy tool, in dollars.
///
/// Missing keys deserialize to the default price of that tool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegacyToolCosts {
    pub ehr: f64,
    pub scheduling: f64,
    pub crm: f64,
    pub billing: f64,
    pub hr: f64,
    pub lms: f64,
    pub inventory: f64,
    pub analytics: f64,
}

impl Default for LegacyToolCosts {
    fn default() -> Self {
        Self {
            ehr: 300.0,
            scheduling: 50.0,
            crm: 150.0,
            billing: 200.0,
            hr: 75.0,
            lms: 50.0,
            inventory: 100.0,
            analytics: 75.0,
        }
    }
}

impl LegacyToolCosts {
    pub fn get(&self, category: ToolCategory) -> f64 {
        match category {
            ToolCategory::Ehr => self.ehr,
            ToolCategory::Scheduling => self.scheduling,
            ToolCategory::Crm => self.crm,
            ToolCategory::Billing => self.billing,
            ToolCategory::Hr => self.hr,
            ToolCategory::Lms => self.lms,
            ToolCategory::Inventory => self.inventory,
            ToolCategory::Analytics => self.analytics,
        }
    }

    pub fn set(&mut self, category: ToolCategory, cost: f64) {
        let slot = match category {
            ToolCategory::Ehr => &mut self.ehr,
            ToolCategory::Scheduling => &mut self.scheduling,
            ToolCategory::Crm => &mut self.crm,
            ToolCategory::Billing => &mut self.billing,
            ToolCategory::Hr => &mut self.hr,
            ToolCategory::Lms => &mut self.lms,
            ToolCategory::Inventory => &mut self.inventory,
            ToolCategory::Analytics => &mut self.analytics,
        };
        *slot = cost;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, category: ToolCategory, cost: f64) -> Self {
        self.set(category, cost);
        self
    }

    /// Categories paired with their cost, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ToolCategory, f64)> + '_ {
        ToolCategory::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
    }

    /// Sum of all eight categories.
    pub fn monthly_per_user(&self) -> f64 {
        self.iter().fold(0.0, |acc, (_, cost)| acc + cost)
    }

    /// Sum of the categories a competitor customer still has to buy separately.
    pub fn not_replaced_by_competitor(&self) -> f64 {
        self.iter()
            .filter(|(c, _)| !c.replaced_by_competitor())
            .fold(0.0, |acc, (_, cost)| acc + cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_costs_sum_to_one_thousand() {
        assert_eq!(LegacyToolCosts::default().monthly_per_user(), 1000.0);
    }

    #[test]
    fn test_competitor_keeps_six_tools() {
        let kept: Vec<_> = ToolCategory::ALL
            .iter()
            .filter(|c| !c.replaced_by_competitor())
            .collect();
        assert_eq!(kept.len(), 6);
        assert_eq!(LegacyToolCosts::default().not_replaced_by_competitor(), 775.0);
    }

    #[test]
    fn test_set_and_get_each_category() {
        let mut costs = LegacyToolCosts::default();
        for (i, category) in ToolCategory::ALL.iter().enumerate() {
            costs.set(*category, i as f64);
        }
        for (i, category) in ToolCategory::ALL.iter().enumerate() {
            assert_eq!(costs.get(*category), i as f64);
        }
        assert_eq!(costs.monthly_per_user(), 28.0);
    }

    #[test]
    fn test_parse_category_is_case_insensitive() {
        assert_eq!("EHR".parse::<ToolCategory>(), Ok(ToolCategory::Ehr));
        assert_eq!(" analytics ".parse::<ToolCategory>(), Ok(ToolCategory::Analytics));
        assert!("payroll".parse::<ToolCategory>().is_err());
    }

    #[test]
    fn test_display_matches_key() {
        for category in ToolCategory::ALL {
            assert_eq!(category.to_string(), category.key());
        }
    }
}
