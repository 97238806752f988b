//! Square grid state space for discrete-time random walks.
//!
//! States live on an implicit `size x size` grid and are addressed either by
//! a 1-based, row-major linear index or by `(row, col)` coordinates. Moving in
//! a [`Direction`] never clips at the boundary, so a step can produce a
//! *candidate* state outside the grid; such states carry zero steady-state
//! weight, which is how boundary proposals get rejected.
//!
//! ```text
//!   col:  0   1   2
//!  row 0  1   2   3
//!  row 1  4   5   6
//!  row 2  7   8   9
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chainsim_grid::{Direction, Grid, SteadyStateWeights};
//!
//! let grid = Grid::from_state_count(9).unwrap();
//! let corner = grid.state(1).unwrap();
//! let east = corner.step(Direction::East);
//!
//! assert_eq!(grid.index_of(east).unwrap(), 2);
//! assert!(corner.is_adjacent(east));
//! assert_eq!(SteadyStateWeights::Uniform.weight(&grid, corner.step(Direction::North)), 0.0);
//! ```

pub mod direction;
pub mod error;
pub mod grid;
pub mod state;
pub mod weights;

pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use state::GridState;
pub use weights::SteadyStateWeights;
