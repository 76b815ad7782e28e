pub mod convex_hull;

pub use convex_hull::{ConvexHull, compute_hull};
