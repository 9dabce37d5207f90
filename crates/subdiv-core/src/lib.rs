//! Diamond-square heightmap generation for grids of any width and height.
//!
//! ```
//! use subdiv_core::{generate, GenerateParams};
//!
//! let grid = generate(13, 9, &GenerateParams::new(7, 0.6)).unwrap();
//! assert_eq!(grid.unset_count(), 0);
//! let h = grid.get(4, 6).unwrap();
//! assert!(h.is_finite());
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod metrics;
pub mod params;
pub mod rect;
pub mod rng;
pub mod subdivide;

pub use error::{Error, Result};
pub use generator::{generate, generate_detailed, Generation};
pub use grid::Grid;
pub use params::GenerateParams;
pub use subdivide::SubdivisionStats;
