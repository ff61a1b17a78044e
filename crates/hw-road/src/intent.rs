//! Vehicle intents — what a vehicle tries to do on its next step.

use std::fmt;

/// Recomputed every step from the outcome of the cruise rule.
///
/// There is no "mid lane change" state: a change, when it happens, completes
/// within a single step and resets the intent to `Cruising`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Travel at full speed in the current lane.
    #[default]
    Cruising,

    /// Could not hold full speed last step; move to the other lane if the
    /// target window is clear.
    WantsLaneChange,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::Cruising        => "cruise",
            Intent::WantsLaneChange => "lane change",
        };
        f.write_str(s)
    }
}
