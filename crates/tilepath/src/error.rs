use thiserror::Error;
use tilepath_core::Point;

/// Errors reported by map construction and by the search entry points.
///
/// These are caller errors: a search that runs and finds nothing is not an
/// error and yields an empty path instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The position lies outside the map.
    #[error("position {0} is out of bounds")]
    OutOfBounds(Point),
    /// The position is a barrier and cannot be a path endpoint.
    #[error("position {0} is a barrier")]
    Barrier(Point),
    /// Traversal cost below the minimum unit (or not a finite number).
    #[error("traversal cost {0} is below the minimum of 1")]
    InvalidCost(f64),
    /// The map has no start or end cell to search between.
    #[error("map has no {0} cell")]
    MissingEndpoint(&'static str),
    /// A text map whose lines have different widths.
    #[error("map line {line} does not match the width of the first line")]
    InconsistentWidth { line: usize },
    /// A text map containing a character with no cell meaning.
    #[error("invalid map character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
