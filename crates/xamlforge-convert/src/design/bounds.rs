use serde::Deserialize;

/// Axis-aligned bounding box in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn origin(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Same box with its origin expressed relative to `origin`.
    #[inline]
    pub fn relative_to(self, origin: (f64, f64)) -> Self {
        Self { x: self.x - origin.0, y: self.y - origin.1, ..self }
    }
}
