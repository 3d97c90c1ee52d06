#![allow(dead_code)] // Each test crate uses a different subset of the helpers

use std::any::Any;
use std::sync::Arc;

use calc_param_lib::{
    param_eq, CalculationParameter, CalculationTarget, GenericTrade, Measure, QueryType,
    StandardId, Trade, TradeInfo,
};

/// Query type marker: which discounting curves to use
pub struct CurveChoice;

/// Query type marker: which FX rate source to use
pub struct FxChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Curves,
    Fx,
}

/// A named parameter, optionally restricted to a single measure.
#[derive(Debug, Clone, PartialEq)]
pub struct TestParameter {
    pub name: String,
    pub category: Category,
    /// When set, the parameter declines every other measure
    pub only_for: Option<Measure>,
}

impl CalculationParameter for TestParameter {
    fn query_type(&self) -> QueryType {
        match self.category {
            Category::Curves => QueryType::of::<CurveChoice>(),
            Category::Fx => QueryType::of::<FxChoice>(),
        }
    }

    fn filter(
        &self,
        _target: &dyn CalculationTarget,
        measure: &Measure,
    ) -> Option<&dyn CalculationParameter> {
        match &self.only_for {
            Some(only) if only != measure => None,
            _ => Some(self),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool {
        param_eq(self, other)
    }
}

/// Curve parameter that applies to every measure
pub fn curves(name: &str) -> Arc<dyn CalculationParameter> {
    Arc::new(TestParameter {
        name: name.to_string(),
        category: Category::Curves,
        only_for: None,
    })
}

/// Curve parameter that only applies to present value
pub fn pv_only_curves(name: &str) -> Arc<dyn CalculationParameter> {
    Arc::new(TestParameter {
        name: name.to_string(),
        category: Category::Curves,
        only_for: Some(Measure::PRESENT_VALUE),
    })
}

pub fn fx(name: &str) -> Arc<dyn CalculationParameter> {
    Arc::new(TestParameter {
        name: name.to_string(),
        category: Category::Fx,
        only_for: None,
    })
}

/// Name of the chosen parameter, if any
pub fn chosen_name(chosen: Option<&dyn CalculationParameter>) -> Option<String> {
    chosen
        .and_then(|p| p.as_any().downcast_ref::<TestParameter>())
        .map(|p| p.name.clone())
}

pub fn cpty(value: &str) -> StandardId {
    StandardId::of("CPTY", value).expect("valid counterparty id")
}

pub fn trade_with(counterparty: Option<StandardId>) -> GenericTrade {
    let info = match counterparty {
        Some(id) => TradeInfo::builder().counterparty(id).build(),
        None => TradeInfo::empty(),
    };
    GenericTrade::new(info, "swap")
}

/// A target that is not a trade
#[derive(Debug)]
pub struct Security {
    pub ticker: String,
}

impl CalculationTarget for Security {}

/// A trade type other than `GenericTrade`, to check routing goes through the capability query
#[derive(Debug)]
pub struct FxForwardTrade {
    pub info: TradeInfo,
    pub notional: f64,
}

impl CalculationTarget for FxForwardTrade {
    fn as_trade(&self) -> Option<&dyn Trade> {
        Some(self)
    }
}

impl Trade for FxForwardTrade {
    fn info(&self) -> &TradeInfo {
        &self.info
    }
}
