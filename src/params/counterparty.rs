//! Parameter selection by trade counterparty.
//!
//! [`CounterpartyParameterSelector`] is itself a [`CalculationParameter`], so
//! it can be used anywhere a plain parameter is expected. It holds one
//! parameter per counterparty plus a default, all of the same query type, and
//! hands the filtering decision to whichever of them applies to the target.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::basics::{CalculationTarget, Measure, StandardId};
use crate::error::ParameterError;
use crate::params::{param_eq, CalculationParameter, QueryType};

/// A calculation parameter that selects the underlying parameter based on the
/// counterparty of the target trade.
///
/// Targets that are not trades, trades without a counterparty and trades whose
/// counterparty has no entry all use the default parameter.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use std::sync::Arc;
/// use calc_param_lib::{
///     param_eq, CalculationParameter, CalculationTarget, CounterpartyParameterSelector,
///     GenericTrade, Measure, QueryType, StandardId, TradeInfo,
/// };
///
/// struct CurveChoice;
///
/// #[derive(Debug, PartialEq)]
/// struct Curves(&'static str);
///
/// impl CalculationParameter for Curves {
///     fn query_type(&self) -> QueryType { QueryType::of::<CurveChoice>() }
///     fn filter(&self, _: &dyn CalculationTarget, _: &Measure) -> Option<&dyn CalculationParameter> {
///         Some(self)
///     }
///     fn as_any(&self) -> &dyn Any { self }
///     fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool { param_eq(self, other) }
/// }
///
/// let bank_a = StandardId::parse("CPTY~BANK_A")?;
/// let selector = CounterpartyParameterSelector::of(
///     [(bank_a.clone(), Arc::new(Curves("CSA-EUR")) as Arc<dyn CalculationParameter>)],
///     Arc::new(Curves("OIS-USD")),
/// )?;
///
/// let trade = GenericTrade::new(TradeInfo::builder().counterparty(bank_a).build(), "swap");
/// let chosen = selector.filter(&trade, &Measure::PRESENT_VALUE).unwrap();
/// assert_eq!(chosen.as_any().downcast_ref::<Curves>(), Some(&Curves("CSA-EUR")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CounterpartyParameterSelector {
    /// The parameter query type
    query_type: QueryType,
    /// The underlying parameters, keyed by counterparty id
    parameters: BTreeMap<StandardId, Arc<dyn CalculationParameter>>,
    /// The default underlying parameter
    default_parameter: Arc<dyn CalculationParameter>,
}

impl CounterpartyParameterSelector {
    /// Builds a selector from per-counterparty parameters and a default.
    ///
    /// The query type is taken from `default_parameter`. If the same
    /// counterparty appears more than once, the last entry wins.
    ///
    /// # Errors
    ///
    /// * [`ParameterError::EmptyParameters`] if `parameters` is empty
    /// * [`ParameterError::QueryTypeMismatch`] if any parameter declares a
    ///   different query type from the default
    pub fn of<I>(
        parameters: I,
        default_parameter: Arc<dyn CalculationParameter>,
    ) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (StandardId, Arc<dyn CalculationParameter>)>,
    {
        let parameters: BTreeMap<_, _> = parameters.into_iter().collect();
        if parameters.is_empty() {
            return Err(ParameterError::EmptyParameters);
        }

        let query_type = default_parameter.query_type();
        for (counterparty, parameter) in &parameters {
            if parameter.query_type() != query_type {
                warn!(
                    %counterparty,
                    found = %parameter.query_type(),
                    expected = %query_type,
                    "counterparty parameter has mismatched query type"
                );
                return Err(ParameterError::QueryTypeMismatch {
                    parameter: format!("{parameter:?}"),
                    counterparty: counterparty.clone(),
                    expected: query_type,
                });
            }
        }

        debug!(
            %query_type,
            counterparties = parameters.len(),
            "built counterparty parameter selector"
        );
        Ok(Self {
            query_type,
            parameters,
            default_parameter,
        })
    }

    /// The parameters keyed by counterparty id.
    pub fn parameters(&self) -> &BTreeMap<StandardId, Arc<dyn CalculationParameter>> {
        &self.parameters
    }

    /// The parameter used when no counterparty entry applies.
    pub fn default_parameter(&self) -> &Arc<dyn CalculationParameter> {
        &self.default_parameter
    }

    /// The parameter registered for `counterparty`, or the default.
    pub fn parameter_for(&self, counterparty: &StandardId) -> &Arc<dyn CalculationParameter> {
        self.parameters
            .get(counterparty)
            .unwrap_or(&self.default_parameter)
    }
}

impl CalculationParameter for CounterpartyParameterSelector {
    fn query_type(&self) -> QueryType {
        self.query_type
    }

    fn filter(
        &self,
        target: &dyn CalculationTarget,
        measure: &Measure,
    ) -> Option<&dyn CalculationParameter> {
        if let Some(trade) = target.as_trade() {
            if let Some(counterparty) = trade.info().counterparty() {
                trace!(
                    %counterparty,
                    %measure,
                    mapped = self.parameters.contains_key(counterparty),
                    "selecting parameter by counterparty"
                );
                return self.parameter_for(counterparty).filter(target, measure);
            }
            trace!(%measure, "trade has no counterparty, using default parameter");
        } else {
            trace!(%measure, "target is not a trade, using default parameter");
        }
        self.default_parameter.filter(target, measure)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool {
        param_eq(self, other)
    }
}

impl PartialEq for CounterpartyParameterSelector {
    fn eq(&self, other: &Self) -> bool {
        self.query_type == other.query_type
            && self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(other.parameters.iter())
                .all(|((id_a, a), (id_b, b))| id_a == id_b && **a == **b)
            && *self.default_parameter == *other.default_parameter
    }
}

impl fmt::Display for CounterpartyParameterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CounterpartyParameterSelector{{queryType={}, parameters={{", self.query_type)?;
        for (i, (counterparty, parameter)) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{counterparty}={parameter:?}")?;
        }
        write!(f, "}}, defaultParameter={:?}}}", self.default_parameter)
    }
}
