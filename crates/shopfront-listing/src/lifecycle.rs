//! Load lifecycle for a mounted listing.

use std::fmt;

/// Where the initial product load stands.
///
/// `Loaded` and `Failed` are terminal for a mount; a new mount starts over
/// at `NotStarted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Mounted, load not yet requested.
    #[default]
    NotStarted,
    /// Load in flight.
    Loading,
    /// Products arrived (possibly zero of them).
    Loaded,
    /// The source rejected the load.
    Failed(String),
}

impl LoadPhase {
    /// Whether the load has settled either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadPhase::Loaded | LoadPhase::Failed(_))
    }

    /// Failure reason, if the load failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadPhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::NotStarted => "not_started",
            LoadPhase::Loading => "loading",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPhase::Failed(reason) => write!(f, "failed: {}", reason),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
