pub mod bounds;

pub use bounds::*;

// Re-export the common external math type
pub use glam::Vec2;

// Unified point type for the whole crate
pub type Point2D = Vec2;
