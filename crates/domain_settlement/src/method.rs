//! Payment method configuration for a calculation
//!
//! A `PaymentMethodConfig` is the catalog entry merged with whatever the
//! session has overridden: selection, a custom rate and a volume share.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{MethodId, Rate};

use crate::catalog::CatalogEntry;

/// A payment method with its rate and allocation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodConfig {
    /// Stable identifier, unique within a configuration set
    pub id: MethodId,
    /// Display label
    pub name: String,
    /// Catalog rate
    pub default_rate: Rate,
    /// Rate override; supersedes `default_rate` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<Rate>,
    /// Fraction of the total amount routed through this method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Decimal>,
    /// Only selected methods take part in a calculation
    #[serde(default)]
    pub selected: bool,
}

impl PaymentMethodConfig {
    /// Creates an unselected method with no overrides
    pub fn new(id: impl Into<MethodId>, name: impl Into<String>, default_rate: Rate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_rate,
            custom_rate: None,
            distribution: None,
            selected: false,
        }
    }

    /// Copies a catalog entry, taking its default selection
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id().clone(),
            name: entry.name().to_string(),
            default_rate: entry.default_rate(),
            custom_rate: None,
            distribution: None,
            selected: entry.is_selected_by_default(),
        }
    }

    pub fn with_custom_rate(mut self, rate: Rate) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    pub fn with_distribution(mut self, share: Decimal) -> Self {
        self.distribution = Some(share);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The rate charges are computed with
    pub fn effective_rate(&self) -> Rate {
        self.custom_rate.unwrap_or(self.default_rate)
    }

    /// The explicit share, if any; a zero share counts as no share
    pub fn explicit_distribution(&self) -> Option<Decimal> {
        self.distribution.filter(|d| !d.is_zero())
    }
}

/// Per-session changes layered over a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Decimal>,
}

impl MethodOverride {
    /// Returns true if the override changes nothing
    pub fn is_empty(&self) -> bool {
        self.selected.is_none() && self.custom_rate.is_none() && self.distribution.is_none()
    }
}

/// Combines a catalog entry with an optional session override
///
/// The entry is copied; neither argument is modified.
pub fn merge(entry: &CatalogEntry, overrides: Option<&MethodOverride>) -> PaymentMethodConfig {
    let mut config = PaymentMethodConfig::from_catalog(entry);
    if let Some(o) = overrides {
        if let Some(selected) = o.selected {
            config.selected = selected;
        }
        config.custom_rate = o.custom_rate;
        config.distribution = o.distribution;
    }
    config
}
