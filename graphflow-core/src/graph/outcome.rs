//! Edge Outcomes
//!
//! An outcome is the label a node selects while executing. After the node
//! returns, the executor follows the outgoing edge registered under exactly
//! that label, if there is one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The condition guarding an edge, and the label a node selects after running.
///
/// `Always` is the default, so a node that never calls `set_outcome` follows
/// its unconditional edge. `Yes` and `No` are set by question nodes and must
/// be wired as a pair. `Error` is a free label for node authors who want a
/// dedicated error exit; the executor routes it like any other outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    #[default]
    Always,
    Yes,
    No,
    Error,
}

impl Outcome {
    /// All outcomes, in declaration order.
    pub const ALL: [Outcome; 4] = [Outcome::Always, Outcome::Yes, Outcome::No, Outcome::Error];

    /// Display name of the outcome (`"ALWAYS"`, `"YES"`, `"NO"`, `"ERROR"`).
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Always => "ALWAYS",
            Outcome::Yes => "YES",
            Outcome::No => "NO",
            Outcome::Error => "ERROR",
        }
    }

    /// Whether this outcome takes part in the ALWAYS / YES / NO wiring rules.
    pub const fn is_routing(self) -> bool {
        !matches!(self, Outcome::Error)
    }

    /// Whether this outcome is one half of a YES / NO decision.
    pub const fn is_decision(self) -> bool {
        matches!(self, Outcome::Yes | Outcome::No)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown outcome name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome: {0}")]
pub struct ParseOutcomeError(String);

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .into_iter()
            .find(|outcome| outcome.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOutcomeError(s.to_string()))
    }
}
