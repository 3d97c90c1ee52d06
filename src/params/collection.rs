//! A set of calculation parameters, at most one per query type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::basics::{CalculationTarget, Measure};
use crate::error::ParameterError;
use crate::params::{CalculationParameter, QueryType};

/// Calculation parameters keyed by their query type.
///
/// This is how a calculation asks "which parameter answers this question?":
/// it looks up a query type, or resolves the whole set against a target and
/// measure with [`CalculationParameters::filter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationParameters {
    parameters: HashMap<QueryType, Arc<dyn CalculationParameter>>,
}

impl CalculationParameters {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set, rejecting two parameters with the same query type.
    pub fn of<I>(parameters: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = Arc<dyn CalculationParameter>>,
    {
        let mut map = HashMap::new();
        for parameter in parameters {
            let query_type = parameter.query_type();
            if map.insert(query_type, parameter).is_some() {
                return Err(ParameterError::DuplicateQueryType(query_type));
            }
        }
        Ok(Self { parameters: map })
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn CalculationParameter>> {
        self.parameters.values()
    }

    /// The parameter declaring `query_type`, if any.
    pub fn find(&self, query_type: QueryType) -> Option<&Arc<dyn CalculationParameter>> {
        self.parameters.get(&query_type)
    }

    /// The parameter declaring `query_type`, downcast to its concrete type `T`.
    ///
    /// `None` if no parameter declares the query type or it is not a `T`.
    pub fn find_as<T: CalculationParameter>(&self, query_type: QueryType) -> Option<&T> {
        self.find(query_type)
            .and_then(|p| p.as_any().downcast_ref::<T>())
    }

    /// Combines two sets; where both hold a query type, `self` wins.
    pub fn combined_with(&self, other: &CalculationParameters) -> CalculationParameters {
        let mut parameters = other.parameters.clone();
        parameters.extend(
            self.parameters
                .iter()
                .map(|(query_type, parameter)| (*query_type, Arc::clone(parameter))),
        );
        CalculationParameters { parameters }
    }

    /// Resolves every parameter against the target and measure.
    ///
    /// Parameters that decline (their `filter` returns `None`) are left out
    /// of the result.
    pub fn filter<'a>(
        &'a self,
        target: &dyn CalculationTarget,
        measure: &Measure,
    ) -> ResolvedParameters<'a> {
        let resolved = self
            .parameters
            .iter()
            .filter_map(|(query_type, parameter)| {
                parameter
                    .filter(target, measure)
                    .map(|chosen| (*query_type, chosen))
            })
            .collect();
        ResolvedParameters { resolved }
    }
}

/// The parameters that apply to one target and measure.
#[derive(Debug, Clone, Default)]
pub struct ResolvedParameters<'a> {
    resolved: HashMap<QueryType, &'a dyn CalculationParameter>,
}

impl<'a> ResolvedParameters<'a> {
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn find(&self, query_type: QueryType) -> Option<&'a dyn CalculationParameter> {
        self.resolved.get(&query_type).copied()
    }

    pub fn find_as<T: CalculationParameter>(&self, query_type: QueryType) -> Option<&'a T> {
        self.find(query_type)
            .and_then(|p| p.as_any().downcast_ref::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{GenericTrade, TradeInfo};
    use crate::params::param_eq;
    use std::any::Any;

    struct CurveChoice;
    struct FxChoice;

    #[derive(Debug, PartialEq)]
    struct Curves(&'static str);

    impl CalculationParameter for Curves {
        fn query_type(&self) -> QueryType {
            QueryType::of::<CurveChoice>()
        }

        fn filter(
            &self,
            _: &dyn CalculationTarget,
            _: &Measure,
        ) -> Option<&dyn CalculationParameter> {
            Some(self)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool {
            param_eq(self, other)
        }
    }

    /// Only applies to present value.
    #[derive(Debug, PartialEq)]
    struct PvFxSource;

    impl CalculationParameter for PvFxSource {
        fn query_type(&self) -> QueryType {
            QueryType::of::<FxChoice>()
        }

        fn filter(
            &self,
            _: &dyn CalculationTarget,
            measure: &Measure,
        ) -> Option<&dyn CalculationParameter> {
            (*measure == Measure::PRESENT_VALUE).then_some(self as &dyn CalculationParameter)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool {
            param_eq(self, other)
        }
    }

    fn curve_choice() -> QueryType {
        QueryType::of::<CurveChoice>()
    }

    fn fx_choice() -> QueryType {
        QueryType::of::<FxChoice>()
    }

    fn params() -> CalculationParameters {
        CalculationParameters::of([
            Arc::new(Curves("OIS")) as Arc<dyn CalculationParameter>,
            Arc::new(PvFxSource),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_query_type_rejected() {
        let err = CalculationParameters::of([
            Arc::new(Curves("a")) as Arc<dyn CalculationParameter>,
            Arc::new(Curves("b")),
        ])
        .unwrap_err();
        assert_eq!(err, ParameterError::DuplicateQueryType(QueryType::of::<CurveChoice>()));
    }

    #[test]
    fn test_find_by_query_type_and_concrete_type() {
        let params = params();
        assert_eq!(params.len(), 2);
        assert!(params.find(QueryType::of::<CurveChoice>()).is_some());
        assert_eq!(params.find_as::<Curves>(curve_choice()), Some(&Curves("OIS")));
        // Right query type, wrong concrete type
        assert!(params.find_as::<PvFxSource>(curve_choice()).is_none());
        assert!(CalculationParameters::empty().find_as::<Curves>(curve_choice()).is_none());
    }

    #[test]
    fn test_combined_with_prefers_self() {
        let mine =
            CalculationParameters::of([Arc::new(Curves("mine")) as Arc<dyn CalculationParameter>])
                .unwrap();
        let combined = mine.combined_with(&params());
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.find_as::<Curves>(curve_choice()), Some(&Curves("mine")));
        assert!(combined.find_as::<PvFxSource>(fx_choice()).is_some());
    }

    #[test]
    fn test_filter_drops_declining_parameters() {
        let params = params();
        let trade = GenericTrade::new(TradeInfo::empty(), "fra");

        let pv = params.filter(&trade, &Measure::PRESENT_VALUE);
        assert_eq!(pv.len(), 2);
        assert!(pv.find_as::<PvFxSource>(fx_choice()).is_some());

        let par = params.filter(&trade, &Measure::PAR_RATE);
        assert_eq!(par.len(), 1);
        assert!(par.find(QueryType::of::<FxChoice>()).is_none());
        assert_eq!(par.find_as::<Curves>(curve_choice()), Some(&Curves("OIS")));
    }
}
