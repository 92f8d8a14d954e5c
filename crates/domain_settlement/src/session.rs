//! Interactive calculator session
//!
//! A session holds the catalog plus the user's edits to it and keeps an
//! up-to-date result. Each edit reruns the whole pipeline synchronously and
//! swaps the stored result wholesale before notifying listeners, so nobody
//! ever observes a result computed from stale input.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::fmt;

use core_kernel::{MethodId, Money, Rate};

use crate::calculation::{try_calculate, CalculationMode, CalculationRequest, CalculationResult};
use crate::catalog::Catalog;
use crate::error::SettlementError;
use crate::method::{merge, MethodOverride, PaymentMethodConfig};
use crate::DEFAULT_INSTANT_SETTLEMENT_RATE;

/// Callback invoked after every recalculation
pub type Listener = Box<dyn FnMut(Option<&CalculationResult>)>;

/// Starting values for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub amount: Money,
    pub mode: CalculationMode,
    pub use_instant_settlement: bool,
    pub settlement_rate: Rate,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            amount: Money::new(dec!(10000)),
            mode: CalculationMode::SingleTransaction,
            use_instant_settlement: false,
            settlement_rate: DEFAULT_INSTANT_SETTLEMENT_RATE,
        }
    }
}

/// Raised when selected shares add up to more than the whole amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionWarning {
    /// Sum of explicit shares across selected methods
    pub total: Decimal,
}

impl fmt::Display for DistributionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = (self.total * dec!(100)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        write!(
            f,
            "Total distribution ({pct}%) exceeds 100%. Please adjust the distribution percentages."
        )
    }
}

/// A calculator session over an immutable catalog
pub struct CalculatorSession {
    catalog: Catalog,
    overrides: BTreeMap<MethodId, MethodOverride>,
    amount: Money,
    mode: CalculationMode,
    use_instant_settlement: bool,
    settlement_rate: Rate,
    result: Option<CalculationResult>,
    listeners: Vec<Listener>,
}

impl CalculatorSession {
    /// Starts a session with the default amount and settings
    pub fn new(catalog: Catalog) -> Self {
        Self::with_defaults(catalog, SessionDefaults::default())
    }

    /// Starts a session from explicit defaults and computes the first result
    pub fn with_defaults(catalog: Catalog, defaults: SessionDefaults) -> Self {
        let mut session = Self {
            catalog,
            overrides: BTreeMap::new(),
            amount: defaults.amount,
            mode: defaults.mode,
            use_instant_settlement: defaults.use_instant_settlement,
            settlement_rate: defaults.settlement_rate,
            result: None,
            listeners: Vec::new(),
        };
        session.recalculate();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn uses_instant_settlement(&self) -> bool {
        self.use_instant_settlement
    }

    pub fn settlement_rate(&self) -> Rate {
        self.settlement_rate
    }

    /// The current result, or `None` when there is nothing to calculate
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Every catalog method merged with this session's overrides, in catalog order
    pub fn methods(&self) -> Vec<PaymentMethodConfig> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| merge(entry, self.overrides.get(entry.id())))
            .collect()
    }

    /// The request the current result was computed from
    pub fn request(&self) -> CalculationRequest {
        CalculationRequest {
            amount: self.amount,
            methods: self.methods(),
            use_instant_settlement: self.use_instant_settlement,
            settlement_rate: self.settlement_rate,
            mode: self.mode,
        }
    }

    /// Registers a callback run after every recalculation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Option<&CalculationResult>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.recalculate();
    }

    /// Sets the amount from raw text; unparsable text counts as zero
    pub fn set_amount_input(&mut self, input: &str) {
        self.set_amount(Money::parse_or_zero(input));
    }

    pub fn set_mode(&mut self, mode: CalculationMode) {
        self.mode = mode;
        self.recalculate();
    }

    /// Selects or deselects a method
    ///
    /// Deselecting drops the method's share so a later reselect starts from
    /// an even split.
    pub fn select_method(&mut self, id: &str, selected: bool) -> Result<(), SettlementError> {
        let entry = self.override_mut(id)?;
        entry.selected = Some(selected);
        if !selected {
            entry.distribution = None;
        }
        self.recalculate();
        Ok(())
    }

    pub fn set_custom_rate(&mut self, id: &str, rate: Rate) -> Result<(), SettlementError> {
        self.override_mut(id)?.custom_rate = Some(rate);
        self.recalculate();
        Ok(())
    }

    /// Sets a custom rate from percentage text (`"1.8"` is 1.8%)
    pub fn set_custom_rate_input(&mut self, id: &str, input: &str) -> Result<(), SettlementError> {
        self.set_custom_rate(id, Rate::parse_percentage_or_zero(input))
    }

    /// Reverts a method to its catalog rate
    pub fn clear_custom_rate(&mut self, id: &str) -> Result<(), SettlementError> {
        self.override_mut(id)?.custom_rate = None;
        self.recalculate();
        Ok(())
    }

    /// Sets a method's share of the total, clamped to `[0, 1]`
    ///
    /// Only the individual share is clamped. Shares across methods may still
    /// add up to more than 1, which `distribution_warning` reports.
    pub fn set_distribution(&mut self, id: &str, share: Decimal) -> Result<(), SettlementError> {
        let share = share.clamp(Decimal::ZERO, Decimal::ONE);
        self.override_mut(id)?.distribution = (!share.is_zero()).then_some(share);
        self.recalculate();
        Ok(())
    }

    /// Sets a method's share from percentage text; unparsable text counts as zero
    pub fn set_distribution_input(&mut self, id: &str, input: &str) -> Result<(), SettlementError> {
        let share = Rate::parse_percentage_or_zero(input).as_decimal();
        self.set_distribution(id, share)
    }

    pub fn set_instant_settlement(&mut self, enabled: bool) {
        self.use_instant_settlement = enabled;
        self.recalculate();
    }

    pub fn set_settlement_rate(&mut self, rate: Rate) {
        self.settlement_rate = rate;
        self.recalculate();
    }

    /// Sum of explicit shares across selected methods
    pub fn total_distribution(&self) -> Decimal {
        self.request().total_distribution()
    }

    /// The largest share `id` can take without pushing the total past 100%
    pub fn remaining_distribution_for(&self, id: &str) -> Result<Decimal, SettlementError> {
        let method = self
            .methods()
            .into_iter()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| SettlementError::unknown_method(id))?;

        let own = if method.selected {
            method.explicit_distribution().unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };
        Ok((Decimal::ONE - (self.total_distribution() - own)).max(Decimal::ZERO))
    }

    /// A warning when selected shares exceed 100%
    pub fn distribution_warning(&self) -> Option<DistributionWarning> {
        let total = self.total_distribution();
        (total > Decimal::ONE).then_some(DistributionWarning { total })
    }

    fn override_mut(&mut self, id: &str) -> Result<&mut MethodOverride, SettlementError> {
        let entry = self
            .catalog
            .get(id)
            .ok_or_else(|| SettlementError::unknown_method(id))?;
        Ok(self.overrides.entry(entry.id().clone()).or_default())
    }

    fn recalculate(&mut self) {
        self.overrides.retain(|_, o| !o.is_empty());

        let request = self.request();
        if request.is_over_allocated() {
            tracing::warn!(total = %request.total_distribution(), "selected distribution exceeds 100%");
        }

        self.result = if !request.is_calculable() {
            tracing::debug!(amount = %request.amount.amount(), "nothing to calculate");
            None
        } else {
            match try_calculate(&request) {
                Ok(result) => {
                    tracing::debug!(
                        amount = %request.amount.amount(),
                        methods = result.per_method_results.len(),
                        final_settlement = %result.total_summary.final_settlement.amount(),
                        "recalculated settlement"
                    );
                    Some(result)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "input outside calculable range");
                    None
                }
            }
        };

        let result = self.result.as_ref();
        for listener in self.listeners.iter_mut() {
            listener(result);
        }
    }
}

impl fmt::Debug for CalculatorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorSession")
            .field("amount", &self.amount)
            .field("mode", &self.mode)
            .field("use_instant_settlement", &self.use_instant_settlement)
            .field("settlement_rate", &self.settlement_rate)
            .field("overrides", &self.overrides)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
