//! Search options.

/// Which position the Manhattan estimate is measured from when a cell is
/// scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Distance from the scored cell itself to the goal.
    #[default]
    Cell,
    /// Distance from the scored cell's parent to the goal. Reproduces the
    /// scoring of older route planners; it overestimates by up to one step.
    Parent,
}

/// Whether a found path starts with the origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathTrim {
    /// `start ..= goal`.
    #[default]
    Full,
    /// Everything after `start`, ending with the goal. A single-cell path
    /// (`start == goal`) is kept as is, so an empty result always means
    /// "no path".
    ExcludeStart,
}

/// Options for [`find_path_with`](crate::find_path_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub trim: PathTrim,
    /// Give up (reporting no path) after expanding this many cells.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// The default options: corrected heuristic, full path, no cap.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_trim(mut self, trim: PathTrim) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
