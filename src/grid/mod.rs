pub mod hash_grid;

pub use hash_grid::HashGrid;

use glam::Vec2;

/// Capability for anything that can be filed into a spatial grid.
///
/// The grid never assumes a concrete item type beyond this: items carry
/// their own 2D position and the grid reads it on insert/update/query.
pub trait Locatable {
    fn location(&self) -> Vec2;
}
