use serde::Deserialize;

use super::Color;

/// A point in relative brush space: `(0, 0)` is the top-left of the filled
/// shape's bounds, `(1, 1)` the bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A single gradient stop. `position` is normalized to `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    pub position: f64,
}

impl ColorStop {
    #[inline]
    pub const fn new(position: f64, color: Color) -> Self {
        Self { color, position }
    }
}

// ── Transform ─────────────────────────────────────────────────────────────

/// 2×3 affine matrix `[[a, c, e], [b, d, f]]`, mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
///
/// The design tool stores gradients as a transform from the shape's
/// relative space *into* gradient space, where the gradient axis runs from
/// `(0, 0.5)` to `(1, 0.5)`. Inverting it recovers the handles on the shape.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct Transform(pub [[f64; 3]; 2]);

impl Transform {
    pub const IDENTITY: Transform = Transform([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    pub fn apply(self, p: Point) -> Point {
        let [[a, c, e], [b, d, f]] = self.0;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Returns `None` for singular (or non-finite) matrices.
    pub fn inverse(self) -> Option<Transform> {
        let [[a, c, e], [b, d, f]] = self.0;
        let det = a * d - b * c;
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        let (ia, ic) = (d / det, -c / det);
        let (ib, id) = (-b / det, a / det);
        let ie = -(ia * e + ic * f);
        let if_ = -(ib * e + id * f);
        Some(Transform([[ia, ic, ie], [ib, id, if_]]))
    }
}

// ── Gradient ──────────────────────────────────────────────────────────────

/// Gradient fill shared by the linear and radial variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gradient {
    #[serde(rename = "gradientStops")]
    pub stops: Vec<ColorStop>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(rename = "gradientTransform", default)]
    pub transform: Option<Transform>,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops, opacity: None, transform: None }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Linear start and end handles.
    ///
    /// Without a usable transform this falls back to the full-bounds
    /// diagonal, top-left to bottom-right.
    pub fn linear_handles(&self) -> (Point, Point) {
        match self.transform.and_then(Transform::inverse) {
            Some(inv) => (inv.apply(Point::new(0.0, 0.5)), inv.apply(Point::new(1.0, 0.5))),
            None => (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        }
    }

    /// Radial center and radii.
    ///
    /// Without a usable transform this falls back to an ellipse inscribed in
    /// the bounds.
    pub fn radial_handles(&self) -> RadialHandles {
        match self.transform.and_then(Transform::inverse) {
            Some(inv) => {
                let center = inv.apply(Point::new(0.5, 0.5));
                RadialHandles {
                    center,
                    radius_x: inv.apply(Point::new(1.0, 0.5)).distance(center),
                    radius_y: inv.apply(Point::new(0.5, 1.0)).distance(center),
                }
            }
            None => RadialHandles { center: Point::new(0.5, 0.5), radius_x: 0.5, radius_y: 0.5 },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialHandles {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    // ── Transform ─────────────────────────────────────────────────────────

    #[test]
    fn inverse_of_identity_is_identity() {
        assert_eq!(Transform::IDENTITY.inverse(), Some(Transform::IDENTITY));
    }

    #[test]
    fn inverse_round_trips_a_point() {
        let t = Transform([[0.0, 1.0, 0.2], [-2.0, 0.0, 1.5]]);
        let inv = t.inverse().unwrap();
        let p = Point::new(0.3, 0.7);
        assert!(close(inv.apply(t.apply(p)), p));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let t = Transform([[1.0, 2.0, 0.0], [2.0, 4.0, 0.0]]);
        assert_eq!(t.inverse(), None);
    }

    // ── handles ───────────────────────────────────────────────────────────

    #[test]
    fn identity_linear_runs_left_to_right() {
        let g = Gradient::new(vec![]).with_transform(Transform::IDENTITY);
        let (start, end) = g.linear_handles();
        assert!(close(start, Point::new(0.0, 0.5)));
        assert!(close(end, Point::new(1.0, 0.5)));
    }

    #[test]
    fn rotated_linear_runs_top_to_bottom() {
        // Quarter turn: shape (x, y) -> gradient (y, 1 - x).
        let g = Gradient::new(vec![]).with_transform(Transform([[0.0, 1.0, 0.0], [-1.0, 0.0, 1.0]]));
        let (start, end) = g.linear_handles();
        assert!(close(start, Point::new(0.5, 0.0)));
        assert!(close(end, Point::new(0.5, 1.0)));
    }

    #[test]
    fn missing_transform_uses_diagonal() {
        let (start, end) = Gradient::new(vec![]).linear_handles();
        assert_eq!((start, end), (Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
    }

    #[test]
    fn identity_radial_is_inscribed() {
        let g = Gradient::new(vec![]).with_transform(Transform::IDENTITY);
        let h = g.radial_handles();
        assert!(close(h.center, Point::new(0.5, 0.5)));
        assert!((h.radius_x - 0.5).abs() < 1e-9);
        assert!((h.radius_y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scaled_radial_shrinks_radii() {
        // Gradient space is twice as large, so the circle is half the size.
        let g = Gradient::new(vec![]).with_transform(Transform([[2.0, 0.0, -0.5], [0.0, 2.0, -0.5]]));
        let h = g.radial_handles();
        assert!(close(h.center, Point::new(0.5, 0.5)));
        assert!((h.radius_x - 0.25).abs() < 1e-9);
    }
}
