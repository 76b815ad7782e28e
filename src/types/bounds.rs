use crate::error::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D bounding box (axis-aligned)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2D {
    /// Creates a new bounding box, rejecting inverted extents
    pub fn new(min: Vec2, max: Vec2) -> SpatialResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(SpatialError::InvalidBounds {
                message: format!("min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Creates a bounding box from two arbitrary corner points
    pub fn from_points(p1: Vec2, p2: Vec2) -> Self {
        Self {
            min: Vec2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Vec2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Creates a bounding box from center and size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Height of the bounding box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Size of the bounding box
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Checks whether a point lies inside the bounding box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
    }
}
