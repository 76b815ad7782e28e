//! 2D spatial utilities: a uniform hash grid for cheap proximity
//! queries and an incremental convex hull.
//!
//! The grid trades exactness for speed: items are replicated into
//! neighboring cells on insertion so that a single-bucket lookup is
//! complete for query radii up to the cell size. The convex hull is
//! Andrew's monotone chain with lazy recomputation behind a dirty
//! flag, so repeated reads between mutations are free.

pub mod algorithms;
pub mod error;
pub mod grid;
pub mod types;
pub mod utils;

pub use error::{SpatialError, SpatialResult};
pub use types::*;

pub mod prelude {
    pub use super::{
        algorithms::convex_hull::{ConvexHull, compute_hull},
        error::{SpatialError, SpatialResult},
        grid::{HashGrid, Locatable},
        types::*,
    };
}
