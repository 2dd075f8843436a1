//! Shortest-path search over tile maps.
//!
//! This crate finds a cheapest route between two cells of a 2D map using A*
//! with a Manhattan-distance heuristic. Maps may be square grids
//! (4-connected) or offset-column hex maps (6-connected):
//!
//! - [`find_path`] / [`find_path_with`] run the search against any
//!   [`CellMap`] and any [`Adjacency`].
//! - [`Tiling`] picks one of the two built-in neighbour rules; bind it to a
//!   map extent with [`Tiling::within`].
//! - [`TileMap`] is a ready-made owned map, buildable from ASCII art.
//!
//! ```
//! use tilepath::{SearchConfig, TileMap};
//!
//! let map: TileMap = "S..\n#.#\n..E".parse().unwrap();
//! let path = map.find_path(&SearchConfig::default()).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! An unreachable goal is not an error: the returned path is simply empty.

mod astar;
mod cell;
mod config;
mod distance;
mod error;
mod frontier;
mod map;
mod neighbors;
mod traits;

pub use astar::{find_path, find_path_with};
pub use cell::{CellKind, CellRecord, MIN_TRAVERSAL_COST};
pub use config::{Heuristic, PathTrim, SearchConfig};
pub use distance::manhattan;
pub use error::PathError;
pub use frontier::Frontier;
pub use map::{Direction, TileMap};
pub use neighbors::{Adjacent, Tiling, grid_neighbors, hex_neighbors};
pub use tilepath_core::{Point, Range};
pub use traits::{Adjacency, CellMap};
