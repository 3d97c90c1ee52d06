//! Calculation targets and the trade capability the selector routes on.
//!
//! Targets are anything a measure can be calculated for. Only trades carry a
//! counterparty, so the trade view is exposed through an explicit capability
//! query ([`CalculationTarget::as_trade`]) instead of downcasting.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::basics::standard_id::StandardId;

/// An entity for which measures can be calculated.
pub trait CalculationTarget: Debug + Send + Sync {
    /// Returns the trade view of this target, or `None` if it is not a trade.
    fn as_trade(&self) -> Option<&dyn Trade> {
        None
    }
}

/// A calculation target that is a trade.
pub trait Trade: CalculationTarget {
    /// Additional trade information, including the counterparty.
    fn info(&self) -> &TradeInfo;
}

/// Descriptive information attached to a trade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeInfo {
    /// Trade identifier, if known
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<StandardId>,
    /// The other party to the trade, if known
    #[cfg_attr(feature = "serde", serde(default))]
    pub counterparty: Option<StandardId>,
    /// Free-form attributes (book, desk, ...)
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: BTreeMap<String, String>,
}

impl TradeInfo {
    /// Trade information with no id, counterparty or attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> TradeInfoBuilder {
        TradeInfoBuilder::default()
    }

    pub fn counterparty(&self) -> Option<&StandardId> {
        self.counterparty.as_ref()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Builder for [`TradeInfo`].
#[derive(Debug, Clone, Default)]
pub struct TradeInfoBuilder {
    info: TradeInfo,
}

impl TradeInfoBuilder {
    pub fn id(mut self, id: StandardId) -> Self {
        self.info.id = Some(id);
        self
    }

    pub fn counterparty(mut self, counterparty: StandardId) -> Self {
        self.info.counterparty = Some(counterparty);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> TradeInfo {
        self.info
    }
}

/// A trade that only carries its [`TradeInfo`] and a product description.
///
/// Useful when routing decisions depend solely on trade information.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericTrade {
    pub info: TradeInfo,
    pub product: String,
}

impl GenericTrade {
    pub fn new(info: TradeInfo, product: impl Into<String>) -> Self {
        Self {
            info,
            product: product.into(),
        }
    }
}

impl CalculationTarget for GenericTrade {
    fn as_trade(&self) -> Option<&dyn Trade> {
        Some(self)
    }
}

impl Trade for GenericTrade {
    fn info(&self) -> &TradeInfo {
        &self.info
    }
}
