//! Routing tables loaded from TOML.
//!
//! A routing config names parameters instead of holding them; the names are
//! resolved through a [`ParameterRegistry`] when the selector is built:
//!
//! ```toml
//! default = "standard"
//!
//! [counterparties]
//! "LEI~5493001KJTIIGC8Y1R12" = "csa-eur"
//! "CPTY~BANK_B" = "csa-usd"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::basics::StandardId;
use crate::params::{CalculationParameter, CounterpartyParameterSelector};

/// Named calculation parameters available to routing configs.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    named: BTreeMap<String, Arc<dyn CalculationParameter>>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter under `name`, replacing any previous one.
    pub fn register(
        mut self,
        name: impl Into<String>,
        parameter: Arc<dyn CalculationParameter>,
    ) -> Self {
        self.named.insert(name.into(), parameter);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CalculationParameter>> {
        self.named.get(name)
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    fn resolve(&self, name: &str) -> Result<Arc<dyn CalculationParameter>> {
        self.get(name).cloned().ok_or_else(|| {
            let known: Vec<&str> = self.named.keys().map(String::as_str).collect();
            anyhow!("unknown parameter '{}' (registered: {})", name, known.join(", "))
        })
    }
}

/// Counterparty routing table: counterparty id to parameter name, plus a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CounterpartyRoutingConfig {
    /// Name of the parameter used when no counterparty entry applies
    pub default: String,

    /// Parameter names keyed by counterparty id in `scheme~value` form
    #[serde(default)]
    pub counterparties: BTreeMap<String, String>,
}

impl CounterpartyRoutingConfig {
    /// Load a routing config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read routing config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in routing config {}", path.display()))
    }

    /// Parse a routing config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse counterparty routing TOML")
    }

    /// Resolve every name through `registry` and build the selector.
    pub fn build(&self, registry: &ParameterRegistry) -> Result<CounterpartyParameterSelector> {
        let default_parameter = registry
            .resolve(&self.default)
            .context("invalid default parameter")?;

        let mut parameters = Vec::with_capacity(self.counterparties.len());
        for (counterparty, name) in &self.counterparties {
            let id = StandardId::parse(counterparty)
                .with_context(|| format!("invalid counterparty id '{counterparty}'"))?;
            let parameter = registry
                .resolve(name)
                .with_context(|| format!("invalid parameter for counterparty '{counterparty}'"))?;
            parameters.push((id, parameter));
        }

        debug!(
            default = %self.default,
            counterparties = parameters.len(),
            "resolved counterparty routing config"
        );
        CounterpartyParameterSelector::of(parameters, default_parameter)
            .context("failed to build counterparty parameter selector")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = CounterpartyRoutingConfig::from_toml("default = \"standard\"").unwrap();
        assert_eq!(config.default, "standard");
        assert!(config.counterparties.is_empty());
    }

    #[test]
    fn test_missing_default_rejected() {
        let err = CounterpartyRoutingConfig::from_toml("[counterparties]\n\"A~B\" = \"x\"")
            .unwrap_err();
        assert!(format!("{err:#}").contains("default"), "{err:#}");
    }

    #[test]
    fn test_unknown_default_is_reported() {
        let config = CounterpartyRoutingConfig {
            default: "missing".to_string(),
            counterparties: BTreeMap::new(),
        };
        let err = config.build(&ParameterRegistry::new()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown parameter 'missing'"), "{err:#}");
    }
}
