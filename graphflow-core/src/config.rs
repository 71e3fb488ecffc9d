//! Run Configuration
//!
//! Settings that change how strictly a graph is validated. The defaults keep
//! the permissive behaviour: when several Start or End nodes are registered,
//! the first one in registration order is used and the rest are ignored.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration attached to a graph with `Graphflow::with_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Reject graphs with more than one Start node or more than one End node.
    pub strict_terminals: bool,
}

impl RunConfig {
    /// Configuration with every optional check turned on.
    pub fn strict() -> Self {
        Self {
            strict_terminals: true,
        }
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
