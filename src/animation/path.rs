use glam::Vec2;

use crate::errors::{Result, VignetteError};

/// Closed uniform Catmull-Rom spline through a ring of control points.
///
/// The parameter `t` is normalised and wraps modulo 1, so `point_at(0)` and
/// `point_at(1 - ε)` meet without a seam. Each span between two consecutive
/// control points covers an equal share of the parameter range, independent
/// of its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    /// Builds a path from `control_points`.
    ///
    /// A final point equal to the first one only marks the loop as closed and
    /// is not kept as a vertex; consecutive duplicates are collapsed.
    pub fn new(control_points: &[Vec2]) -> Result<Self> {
        let mut points: Vec<Vec2> = Vec::with_capacity(control_points.len());
        for &p in control_points {
            if points.last().is_none_or(|last| !last.abs_diff_eq(p, f32::EPSILON)) {
                points.push(p);
            }
        }
        while points.len() > 1 && points[0].abs_diff_eq(points[points.len() - 1], f32::EPSILON) {
            points.pop();
        }

        if points.len() < 3 {
            return Err(VignetteError::DegeneratePath {
                distinct: points.len(),
            });
        }

        Ok(Self { points })
    }

    /// Distinct control points forming the ring.
    #[must_use]
    pub fn control_points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of spline spans (equal to the number of distinct points).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len()
    }

    /// Samples the curve at `t`, wrapped into `[0, 1)`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let n = self.points.len();
        let u = t.rem_euclid(1.0) * n as f32;
        let index = (u.floor() as usize).min(n - 1);
        let weight = u - index as f32;

        let p0 = self.points[(index + n - 1) % n];
        let p1 = self.points[index];
        let p2 = self.points[(index + 1) % n];
        let p3 = self.points[(index + 2) % n];

        catmull_rom(weight, p0, p1, p2, p3)
    }
}

/// Uniform Catmull-Rom (tension ½) blend of the span `p1 → p2`.
fn catmull_rom(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t2 * t;

    (2.0 * p1 - 2.0 * p2 + v0 + v1) * t3 + (-3.0 * p1 + 3.0 * p2 - 2.0 * v0 - v1) * t2 + v0 * t + p1
}
