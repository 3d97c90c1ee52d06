//! # Calc-Param-Lib: Counterparty-Aware Calculation Parameters
//!
//! `calc-param-lib` routes calculation parameters to trades. A calculation
//! parameter is a pluggable setting (which discounting curves to use, which FX
//! source, ...) that decides per target and measure whether and how it applies.
//! The library lets one such setting vary by the counterparty of the trade.
//!
//! ## Core Features
//!
//! - **Counterparty Selection**: [`CounterpartyParameterSelector`] picks one parameter per
//!   trade counterparty and falls back to a default for everything else
//! - **Query-Typed Parameters**: every parameter declares a [`QueryType`]; selectors
//!   refuse to mix categories at construction time
//! - **Composable**: the selector is itself a [`CalculationParameter`] and can be nested or
//!   stored in a [`CalculationParameters`] set
//! - **Configurable**: routing tables can be loaded from TOML (`serde` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use calc_param_lib::{
//!     CalculationParameter, CounterpartyParameterSelector, GenericTrade, Measure, StandardId,
//!     TradeInfo,
//! };
//! # fn standard_curves() -> Arc<dyn CalculationParameter> { unimplemented!() }
//! # fn csa_curves() -> Arc<dyn CalculationParameter> { unimplemented!() }
//!
//! let bank_a = StandardId::parse("CPTY~BANK_A")?;
//! let selector =
//!     CounterpartyParameterSelector::of([(bank_a.clone(), csa_curves())], standard_curves())?;
//!
//! let trade = GenericTrade::new(TradeInfo::builder().counterparty(bank_a).build(), "swap");
//! let chosen = selector.filter(&trade, &Measure::PRESENT_VALUE);
//! # Ok::<(), calc_param_lib::ParameterError>(())
//! ```
//!
//! With the `serde` feature the same selector can be built from a TOML routing table through
//! `CounterpartyRoutingConfig` and a `ParameterRegistry` of named parameters.
//!
//! ## Selection Rules
//!
//! For a target and measure the selector:
//! 1. uses the counterparty's parameter when the target is a trade whose counterparty has an entry
//! 2. uses the default parameter otherwise (unknown counterparty, no counterparty, or not a trade)
//!
//! and returns whatever the chosen parameter's own `filter` returns.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod basics;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod params;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Targets, trades and identifiers
pub use basics::{
    CalculationTarget, GenericTrade, Measure, StandardId, Trade, TradeInfo, TradeInfoBuilder,
};

// Parameter contract and implementations
pub use params::{
    param_eq, CalculationParameter, CalculationParameters, CounterpartyParameterSelector,
    QueryType, ResolvedParameters,
};

// Configuration
#[cfg(feature = "serde")]
pub use config::{CounterpartyRoutingConfig, ParameterRegistry};

pub use error::ParameterError;
