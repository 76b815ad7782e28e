//! Convex hull of a 2D point set via Andrew's monotone chain.
//!
//! [`compute_hull`] is the one-shot batch entry point; [`ConvexHull`]
//! wraps it with an incremental add/remove API and recomputes lazily
//! behind a dirty flag, so repeated hull reads between mutations cost
//! nothing.

use glam::Vec2;

/// Orientation test for the triplet (p, q, r).
/// - `> 0`: counter-clockwise (left) turn
/// - `< 0`: clockwise (right) turn
/// - `== 0`: collinear
#[inline]
fn orientation(p: Vec2, q: Vec2, r: Vec2) -> f32 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Appends `interior` then `last` onto a chain starting at `first`,
/// discarding any middle point whose triple is not a strict turn of the
/// requested orientation. Collinear middles are always discarded.
fn build_chain(first: Vec2, interior: &[Vec2], last: Vec2, keep_ccw: bool) -> Vec<Vec2> {
    let mut chain = Vec::with_capacity(interior.len() + 2);
    chain.push(first);
    for &point in interior.iter().chain(std::iter::once(&last)) {
        while chain.len() >= 2 {
            let turn = orientation(chain[chain.len() - 2], chain[chain.len() - 1], point);
            let keep = if keep_ccw { turn > 0.0 } else { turn < 0.0 };
            if keep {
                break;
            }
            chain.pop();
        }
        chain.push(point);
    }
    chain
}

/// Computes the convex hull of `points` as a closed polygon vertex
/// sequence in counter-clockwise order (y-up), without repeating the
/// first vertex at the end.
///
/// Fewer than four points come back verbatim, sorted by x then y — a
/// degenerate but valid convex shape. Coincident points keep their
/// input order (the sort is stable), so results are reproducible.
/// Collinear interior points never appear on the hull.
pub fn compute_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    if sorted.len() < 4 {
        return sorted;
    }

    // Leftmost and rightmost points anchor both chains; the rest are
    // split by which side of the anchor line they fall on. On-line
    // points go to the lower subset and get discarded by its turn test.
    let left = sorted[0];
    let right = sorted[sorted.len() - 1];
    let mut lower_points = Vec::new();
    let mut upper_points = Vec::new();
    for &point in &sorted[1..sorted.len() - 1] {
        if orientation(left, right, point) > 0.0 {
            upper_points.push(point);
        } else {
            lower_points.push(point);
        }
    }

    let mut hull = build_chain(left, &lower_points, right, true);
    let upper = build_chain(left, &upper_points, right, false);
    // The upper chain runs left to right; walk it backwards and skip its
    // anchors, which the lower chain already carries.
    hull.extend(upper.iter().rev().skip(1).take(upper.len() - 2).copied());
    hull
}

/// A mutable 2D point set with a lazily recomputed convex hull.
///
/// The set owns a private copy of its points; mutate it only through
/// [`add_point`](Self::add_point) / [`remove_point`](Self::remove_point)
/// and the cached hull can never go stale.
#[derive(Debug, Clone, Default)]
pub struct ConvexHull {
    points: Vec<Vec2>,
    cached: Vec<Vec2>,
    dirty: bool,
}

impl ConvexHull {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a point set from an initial batch of points.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self {
            points,
            cached: Vec::new(),
            dirty: true,
        }
    }

    /// Adds a point. Duplicate coordinates are allowed.
    pub fn add_point(&mut self, point: Vec2) {
        self.points.push(point);
        self.dirty = true;
    }

    /// Removes the first point with exactly these coordinates; returns
    /// whether one was found.
    pub fn remove_point(&mut self, point: Vec2) -> bool {
        match self.points.iter().position(|&p| p == point) {
            Some(index) => {
                self.points.remove(index);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// The current point set, in insertion order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The convex hull of the current point set, recomputed only when a
    /// mutation happened since the last call.
    pub fn hull(&mut self) -> &[Vec2] {
        if self.dirty {
            self.cached = compute_hull(&self.points);
            self.dirty = false;
        }
        &self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::random_point_in_circle;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn square_with_interior() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(5.0, 5.0),
        ]
    }

    /// Shoelace sum; positive for counter-clockwise winding.
    fn signed_area(polygon: &[Vec2]) -> f32 {
        let n = polygon.len();
        (0..n)
            .map(|i| {
                let a = polygon[i];
                let b = polygon[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum::<f32>()
            * 0.5
    }

    #[test]
    fn test_square_hull_excludes_interior_point() {
        let hull = compute_hull(&square_with_interior());
        assert_eq!(
            hull,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ]
        );
        assert_relative_eq!(signed_area(&hull), 100.0);
    }

    #[test]
    fn test_degenerate_inputs_come_back_sorted() {
        assert!(compute_hull(&[]).is_empty());

        let one = vec![Vec2::new(3.0, 4.0)];
        assert_eq!(compute_hull(&one), one);

        let two = vec![Vec2::new(5.0, 0.0), Vec2::new(-1.0, 2.0)];
        assert_eq!(
            compute_hull(&two),
            vec![Vec2::new(-1.0, 2.0), Vec2::new(5.0, 0.0)]
        );

        let three = vec![Vec2::new(2.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 5.0)];
        assert_eq!(
            compute_hull(&three),
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 5.0), Vec2::new(2.0, 1.0)]
        );
    }

    #[test]
    fn test_collinear_set_keeps_only_extremes() {
        let points = vec![
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(1.0, 1.0),
        ];
        assert_eq!(
            compute_hull(&points),
            vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0)]
        );
    }

    #[test]
    fn test_no_input_point_lies_outside_hull() {
        let mut rng = StdRng::seed_from_u64(42);
        let points: Vec<Vec2> = (0..200)
            .map(|_| random_point_in_circle(Vec2::new(10.0, -5.0), 50.0, &mut rng))
            .collect();

        let hull = compute_hull(&points);
        assert!(hull.len() >= 3);
        assert!(signed_area(&hull) > 0.0);

        // With CCW winding, a point strictly right of any edge would be
        // outside the hull.
        for point in &points {
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                assert!(
                    orientation(a, b, *point) >= -1e-2,
                    "point {:?} lies outside edge {:?} -> {:?}",
                    point,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_incremental_add_and_remove() {
        let mut set = ConvexHull::from_points(square_with_interior());
        assert_eq!(set.hull().len(), 4);

        // A point past the right edge grows the hull.
        set.add_point(Vec2::new(20.0, 5.0));
        let hull = set.hull().to_vec();
        assert_eq!(hull.len(), 5);
        assert!(hull.contains(&Vec2::new(20.0, 5.0)));

        // Removing it restores the square.
        assert!(set.remove_point(Vec2::new(20.0, 5.0)));
        assert_eq!(set.hull().len(), 4);

        // Absent coordinates are a no-op.
        assert!(!set.remove_point(Vec2::new(99.0, 99.0)));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_interior_mutation_leaves_hull_unchanged() {
        let mut set = ConvexHull::new();
        for point in square_with_interior() {
            set.add_point(point);
        }
        let before = set.hull().to_vec();

        // Removing the interior point must not change the boundary.
        assert!(set.remove_point(Vec2::new(5.0, 5.0)));
        assert_eq!(set.hull(), &before[..]);
    }
}
