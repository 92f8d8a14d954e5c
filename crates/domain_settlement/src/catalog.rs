//! Static catalog of payment methods and their default PG rates
//!
//! The catalog is seed data. Sessions copy entries and layer their own
//! overrides on top; an entry is never modified after construction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{MethodId, Rate};

/// A payment method as published in the rate card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    id: MethodId,
    name: String,
    default_rate: Rate,
    selected_by_default: bool,
}

impl CatalogEntry {
    /// Creates a catalog entry with a fractional default rate
    pub fn new(id: impl Into<MethodId>, name: impl Into<String>, default_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_rate: Rate::new(default_rate),
            selected_by_default: false,
        }
    }

    /// Marks the entry as pre-selected in a fresh session
    pub fn selected_by_default(mut self) -> Self {
        self.selected_by_default = true;
        self
    }

    pub fn id(&self) -> &MethodId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_rate(&self) -> Rate {
        self.default_rate
    }

    pub fn is_selected_by_default(&self) -> bool {
        self.selected_by_default
    }
}

/// An ordered, read-only collection of catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from entries, keeping the first entry for any duplicate id
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().all(|e| e.id != entry.id) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// The standard Indian PG rate card
    ///
    /// | Method | Default rate |
    /// |--------|--------------|
    /// | UPI | 0.50% |
    /// | Credit Card | 2.00% |
    /// | Debit Card | 1.00% |
    /// | Net Banking | 1.50% |
    /// | Wallets | 1.75% |
    /// | Corporate Credit Card | 2.75% |
    /// | Prepaid Credit Card | 2.50% |
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogEntry::new("upi", "UPI", dec!(0.005)).selected_by_default(),
            CatalogEntry::new("creditCard", "Credit Card", dec!(0.02)),
            CatalogEntry::new("debitCard", "Debit Card", dec!(0.01)),
            CatalogEntry::new("netBanking", "Net Banking", dec!(0.015)),
            CatalogEntry::new("wallets", "Wallets", dec!(0.0175)),
            CatalogEntry::new("corporateCard", "Corporate Credit Card", dec!(0.0275)),
            CatalogEntry::new("prepaidCard", "Prepaid Credit Card", dec!(0.025)),
        ])
    }

    /// Looks up an entry by id
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    /// Returns true if the catalog has an entry with this id
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries in display order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
