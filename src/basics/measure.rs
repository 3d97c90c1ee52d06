use std::borrow::Cow;
use std::fmt;

/// Identifies what is being calculated for a target, such as present value.
///
/// Measures are compared by name. The well-known measures are available as
/// constants; anything else can be created with [`Measure::of`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure(Cow<'static, str>);

impl Measure {
    pub const PRESENT_VALUE: Measure = Measure(Cow::Borrowed("PresentValue"));
    pub const PV01: Measure = Measure(Cow::Borrowed("PV01"));
    pub const PAR_RATE: Measure = Measure(Cow::Borrowed("ParRate"));
    pub const CURRENCY_EXPOSURE: Measure = Measure(Cow::Borrowed("CurrencyExposure"));

    pub fn of(name: impl Into<String>) -> Self {
        Measure(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
