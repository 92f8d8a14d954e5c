//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{MethodId, Money, Rate};
use domain_settlement::{CalculationMode, CalculationRequest, PaymentMethodConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{AmountFixtures, RateFixtures};

/// Builder for constructing test payment methods
pub struct PaymentMethodConfigBuilder {
    id: MethodId,
    name: String,
    default_rate: Rate,
    custom_rate: Option<Rate>,
    distribution: Option<Decimal>,
    selected: bool,
}

impl Default for PaymentMethodConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentMethodConfigBuilder {
    /// Creates a new builder for a selected 1% method
    pub fn new() -> Self {
        Self {
            id: MethodId::new("testMethod"),
            name: "Test Method".to_string(),
            default_rate: Rate::new(dec!(0.01)),
            custom_rate: None,
            distribution: None,
            selected: true,
        }
    }

    /// Sets the id, using it as the name too
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = MethodId::new(id);
        self.name = id.to_string();
        self
    }

    /// Sets the default rate
    pub fn with_default_rate(mut self, rate: Decimal) -> Self {
        self.default_rate = Rate::new(rate);
        self
    }

    /// Sets a custom rate
    pub fn with_custom_rate(mut self, rate: Decimal) -> Self {
        self.custom_rate = Some(Rate::new(rate));
        self
    }

    /// Sets the distribution share
    pub fn with_distribution(mut self, share: Decimal) -> Self {
        self.distribution = Some(share);
        self
    }

    /// Marks the method unselected
    pub fn unselected(mut self) -> Self {
        self.selected = false;
        self
    }

    /// Builds the method
    pub fn build(self) -> PaymentMethodConfig {
        PaymentMethodConfig {
            id: self.id,
            name: self.name,
            default_rate: self.default_rate,
            custom_rate: self.custom_rate,
            distribution: self.distribution,
            selected: self.selected,
        }
    }
}

/// Builder for constructing calculation requests
pub struct CalculationRequestBuilder {
    amount: Money,
    methods: Vec<PaymentMethodConfig>,
    use_instant_settlement: bool,
    settlement_rate: Rate,
    mode: CalculationMode,
}

impl Default for CalculationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationRequestBuilder {
    /// Creates a builder for 10,000 with no methods and no instant settlement
    pub fn new() -> Self {
        Self {
            amount: AmountFixtures::ten_thousand(),
            methods: Vec::new(),
            use_instant_settlement: false,
            settlement_rate: RateFixtures::instant_settlement(),
            mode: CalculationMode::SingleTransaction,
        }
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Money::new(amount);
        self
    }

    /// Adds a method
    pub fn with_method(mut self, method: PaymentMethodConfig) -> Self {
        self.methods.push(method);
        self
    }

    /// Enables instant settlement at the given rate
    pub fn with_instant_settlement(mut self, rate: Decimal) -> Self {
        self.use_instant_settlement = true;
        self.settlement_rate = Rate::new(rate);
        self
    }

    /// Sets the settlement rate without enabling instant settlement
    pub fn with_settlement_rate(mut self, rate: Decimal) -> Self {
        self.settlement_rate = Rate::new(rate);
        self
    }

    /// Sets the mode
    pub fn monthly(mut self) -> Self {
        self.mode = CalculationMode::MonthlyVolume;
        self
    }

    /// Builds the request
    pub fn build(self) -> CalculationRequest {
        CalculationRequest {
            amount: self.amount,
            methods: self.methods,
            use_instant_settlement: self.use_instant_settlement,
            settlement_rate: self.settlement_rate,
            mode: self.mode,
        }
    }
}
