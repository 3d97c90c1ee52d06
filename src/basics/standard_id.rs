//! Scheme-qualified identifiers, used for trade and counterparty ids.

use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

const SEPARATOR: char = '~';

/// An identifier made of a scheme and a value, written `scheme~value`.
///
/// The scheme names the issuing authority (for example `LEI` or an internal
/// counterparty master) and the value is the identifier within that scheme.
/// Both parts must be non-empty and the scheme may not contain `~`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StandardId {
    scheme: String,
    value: String,
}

impl StandardId {
    /// Creates an identifier from its scheme and value.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> Result<Self, ParameterError> {
        let scheme = scheme.into();
        let value = value.into();
        if scheme.trim().is_empty() || scheme.contains(SEPARATOR) {
            return Err(ParameterError::InvalidStandardId(format!(
                "scheme '{scheme}' must be non-empty and must not contain '{SEPARATOR}'"
            )));
        }
        if value.trim().is_empty() {
            return Err(ParameterError::InvalidStandardId(format!(
                "value for scheme '{scheme}' must be non-empty"
            )));
        }
        Ok(Self { scheme, value })
    }

    /// Parses the `scheme~value` text form.
    pub fn parse(text: &str) -> Result<Self, ParameterError> {
        match text.split_once(SEPARATOR) {
            Some((scheme, value)) => Self::of(scheme, value),
            None => Err(ParameterError::InvalidStandardId(format!(
                "'{text}' is not of the form scheme{SEPARATOR}value"
            ))),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SEPARATOR, self.value)
    }
}

impl FromStr for StandardId {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StandardId {
    type Error = ParameterError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<StandardId> for String {
    fn from(id: StandardId) -> Self {
        id.to_string()
    }
}
