use thiserror::Error;

use crate::basics::standard_id::StandardId;
use crate::params::QueryType;

/// Errors raised while building parameter selectors and their inputs.
///
/// Selection itself never fails; every error here is reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("counterparty parameter map must not be empty")]
    EmptyParameters,

    #[error(
        "map contained a parameter '{parameter}' for counterparty '{counterparty}' that did not match the expected query type '{expected}'"
    )]
    QueryTypeMismatch {
        parameter: String,
        counterparty: StandardId,
        expected: QueryType,
    },

    #[error("more than one parameter declared query type '{0}'")]
    DuplicateQueryType(QueryType),

    #[error("invalid standard id: {0}")]
    InvalidStandardId(String),
}
