use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use glam::Vec2;
use log::debug;

use crate::error::*;
use crate::grid::Locatable;
use crate::types::Bounds2D;

/// Neighbor offsets, in units of the cell radius. Together with the
/// home cell they cover the full 3x3 neighborhood of an item.
const REPLICA_OFFSETS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

/// Uniform spatial hash over a bounded 2D region.
///
/// Each cell is a square of side `2 * radius`. On insertion an item is
/// filed into the cell containing its location plus up to eight
/// neighboring cells (offset by one cell radius along each axis), so a
/// query never misses a neighbor that sits just across a cell boundary.
/// A single-bucket lookup is therefore complete for query radii up to
/// the cell size; the structure is deliberately approximate beyond that.
///
/// All operations besides construction and [`rebuild_all`](Self::rebuild_all)
/// are total: out-of-bounds locations are silently ignored rather than
/// erroring, so a live update loop never trips over a stray position.
#[derive(Debug, Clone)]
pub struct HashGrid<T> {
    bounds: Bounds2D,
    radius: f32,
    num_cols: usize,
    num_rows: usize,
    buckets: HashMap<usize, HashSet<T>>,
    /// Authoritative membership, independent of bucket layout.
    registry: HashSet<T>,
}

impl<T> HashGrid<T>
where
    T: Locatable + Eq + Hash + Clone,
{
    /// Creates a grid covering `bounds` with cell radius `radius`.
    ///
    /// Fails when the bounds have no extent on either axis, or when the
    /// radius is non-positive or too large to fit at least one full cell
    /// per axis.
    pub fn new(bounds: Bounds2D, radius: f32) -> SpatialResult<Self> {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(SpatialError::InvalidBounds {
                message: format!("grid needs positive extent, got {}", bounds),
            });
        }

        let (num_cols, num_rows) = Self::grid_dimensions(&bounds, radius)?;
        debug!(
            "created {}x{} hash grid over {} with cell radius {}",
            num_cols, num_rows, bounds, radius
        );

        Ok(Self {
            bounds,
            radius,
            num_cols,
            num_rows,
            buckets: HashMap::new(),
            registry: HashSet::new(),
        })
    }

    fn grid_dimensions(bounds: &Bounds2D, radius: f32) -> SpatialResult<(usize, usize)> {
        if radius <= 0.0 {
            return Err(SpatialError::InvalidRadius {
                radius,
                reason: "must be positive".to_string(),
            });
        }

        let cell_size = radius * 2.0;
        let num_cols = (bounds.width() / cell_size).floor() as usize;
        let num_rows = (bounds.height() / cell_size).floor() as usize;

        if num_cols == 0 || num_rows == 0 {
            return Err(SpatialError::InvalidRadius {
                radius,
                reason: format!(
                    "cell size {} does not fit into a {}x{} region",
                    cell_size,
                    bounds.width(),
                    bounds.height()
                ),
            });
        }

        Ok((num_cols, num_rows))
    }

    /// Bucket key for a location, or `None` when it falls outside the
    /// grid bounds. Locations exactly on the max edge bin into the last
    /// column/row so the closed region is fully covered.
    fn bucket_key(&self, location: Vec2) -> Option<usize> {
        if !self.bounds.contains_point(location) {
            return None;
        }

        let cell_size = self.radius * 2.0;
        let col = (((location.x - self.bounds.min.x) / cell_size) as usize).min(self.num_cols - 1);
        let row = (((location.y - self.bounds.min.y) / cell_size) as usize).min(self.num_rows - 1);
        Some(row * self.num_cols + col)
    }

    /// Files an item into the bucket containing `location`. Returns
    /// whether the location was in bounds.
    fn insert_at(&mut self, item: T, location: Vec2) -> bool {
        match self.bucket_key(location) {
            Some(key) => {
                self.buckets.entry(key).or_default().insert(item);
                true
            }
            None => false,
        }
    }

    /// Files `item` plus its boundary replicas into the eight cells
    /// around its home cell (out-of-bounds replicas are skipped).
    fn insert_replicated(&mut self, item: &T) -> bool {
        let location = item.location();
        let home = self.insert_at(item.clone(), location);
        for (dx, dy) in REPLICA_OFFSETS {
            let replica = location + Vec2::new(dx, dy) * self.radius;
            self.insert_at(item.clone(), replica);
        }
        home
    }

    /// Inserts an item at its current location.
    ///
    /// Returns `false` without registering the item when its home
    /// location lies outside the grid bounds.
    pub fn insert(&mut self, item: T) -> bool {
        let home = self.insert_replicated(&item);
        if home {
            self.registry.insert(item);
        }
        home
    }

    /// Removes an item from the registry and from every bucket it was
    /// replicated into, dropping buckets that end up empty.
    ///
    /// Returns `false` when the item was not in the grid. This scans all
    /// buckets, so it is the most expensive mutation.
    pub fn remove(&mut self, item: &T) -> bool {
        if !self.registry.remove(item) {
            return false;
        }

        self.buckets.retain(|_, bucket| {
            bucket.remove(item);
            !bucket.is_empty()
        });
        true
    }

    /// Re-files an item whose location has changed. Wraps
    /// [`remove`](Self::remove) + [`insert`](Self::insert), so it
    /// inherits the full bucket scan cost of removal.
    pub fn update(&mut self, item: &T) -> bool {
        if !self.remove(item) {
            return false;
        }
        self.insert(item.clone())
    }

    /// Returns the items within `radius` (the grid's cell radius) of
    /// `location`, without duplicates.
    ///
    /// Only the single bucket containing `location` is inspected;
    /// boundary replication keeps this complete for distances up to the
    /// cell radius. Out-of-bounds locations yield an empty result.
    pub fn query_radius(&self, location: Vec2) -> Vec<&T> {
        let Some(key) = self.bucket_key(location) else {
            return Vec::new();
        };
        let Some(bucket) = self.buckets.get(&key) else {
            return Vec::new();
        };

        let radius_squared = self.radius * self.radius;
        bucket
            .iter()
            .filter(|item| item.location().distance_squared(location) <= radius_squared)
            .collect()
    }

    /// Clears all buckets and re-files every registered item, optionally
    /// switching to a new cell radius first.
    ///
    /// Call this after externally mutating item positions in bulk; for a
    /// single moved item prefer [`update`](Self::update).
    pub fn rebuild_all(&mut self, new_radius: Option<f32>) -> SpatialResult<()> {
        if let Some(radius) = new_radius {
            let (num_cols, num_rows) = Self::grid_dimensions(&self.bounds, radius)?;
            self.radius = radius;
            self.num_cols = num_cols;
            self.num_rows = num_rows;
        }

        self.buckets.clear();
        let items: Vec<T> = self.registry.iter().cloned().collect();
        for item in &items {
            self.insert_replicated(item);
        }

        debug!(
            "rebuilt hash grid: {} items across {} buckets",
            self.registry.len(),
            self.buckets.len()
        );
        Ok(())
    }

    /// Whether the item is registered in the grid.
    pub fn contains(&self, item: &T) -> bool {
        self.registry.contains(item)
    }

    /// Number of registered items (bucket replicas do not count).
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Iterates over all registered items, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.registry.iter()
    }

    /// Removes every item and bucket.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.registry.clear();
    }

    /// Removes each given item; returns `true` when at least one was
    /// actually present.
    pub fn remove_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut changed = false;
        for item in items {
            changed |= self.remove(item);
        }
        changed
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Cell radius (half the cell side length); also the guaranteed
    /// query radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }
}

impl<T> Extend<T> for HashGrid<T>
where
    T: Locatable + Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

/// Grids compare by registered membership only; the spatial bucket
/// layout (cell radius, replication) does not affect equality.
impl<T> PartialEq for HashGrid<T>
where
    T: Locatable + Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry
    }
}

impl<T> Eq for HashGrid<T> where T: Locatable + Eq + Hash + Clone {}
