//! The calculation parameter contract and its category tag.
//!
//! A calculation parameter is a pluggable setting that decides, per target and
//! measure, whether and how it applies. Every parameter declares a
//! [`QueryType`], the category of question it answers (for example "which
//! discounting curves to use"). Callers look parameters up by query type, and
//! composites such as [`CounterpartyParameterSelector`] only ever hold
//! parameters of a single query type.

pub mod collection;
pub mod counterparty;

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::basics::{CalculationTarget, Measure};

pub use collection::{CalculationParameters, ResolvedParameters};
pub use counterparty::CounterpartyParameterSelector;

/// Category declared by a calculation parameter.
///
/// Built from a marker type with [`QueryType::of`] and compared by type
/// identity. The type name is kept only for display.
#[derive(Clone, Copy)]
pub struct QueryType {
    id: TypeId,
    name: &'static str,
}

impl QueryType {
    /// The query type identified by the marker type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified name of the marker type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Marker type name without its module path.
    pub fn simple_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for QueryType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QueryType {}

impl Hash for QueryType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryType({})", self.simple_name())
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// A parameter that can influence a calculation.
///
/// Implementations are immutable values shared between threads.
pub trait CalculationParameter: Send + Sync + fmt::Debug + 'static {
    /// The category of question this parameter answers.
    fn query_type(&self) -> QueryType;

    /// Chooses the parameter to apply for the target and measure.
    ///
    /// Plain parameters usually return `Some(self)`. Composite parameters
    /// delegate to one of the parameters they hold. `None` means no parameter
    /// of this query type applies.
    fn filter(
        &self,
        target: &dyn CalculationTarget,
        measure: &Measure,
    ) -> Option<&dyn CalculationParameter>;

    /// Returns the value as `&dyn Any` so that callers can attempt a concrete
    /// `downcast_ref::<T>()` when the concrete type is known.
    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another, possibly differently typed, parameter.
    ///
    /// Most implementations forward to [`param_eq`].
    fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool;
}

/// Equality helper for [`CalculationParameter::dyn_eq`]: true when `other` has
/// the same concrete type as `this` and compares equal to it.
pub fn param_eq<T>(this: &T, other: &dyn CalculationParameter) -> bool
where
    T: CalculationParameter + PartialEq,
{
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

impl PartialEq for dyn CalculationParameter {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}
