use crate::nbody::Body;
use crate::utils::NBodyError;

/// An axis-aligned rectangle in 2D space, defined by two opposite corners
/// with `x0 <= x1` and `y0 <= y1`. Immutable once constructed.
///
/// # Examples
///
/// ```
/// use rs_nbody::nbody::Bounds;
///
/// let bounds = Bounds::new(-1.0, -1.0, 1.0, 1.0);
/// assert_eq!(bounds.center(), (0.0, 0.0));
/// assert_eq!(bounds.max_side(), 2.0);
/// assert!(bounds.contains(1.0, -1.0)); // boundaries are inclusive
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Bounds { x0, y0, x1, y1 }
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Length of the longest side.
    pub fn max_side(&self) -> f64 {
        (self.x1 - self.x0).max(self.y1 - self.y0)
    }

    /// Returns true if the point lies inside the rectangle. All four
    /// boundaries are inclusive, so a point on a shared quadrant edge is
    /// contained by every quadrant touching that edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Splits the rectangle into four quadrants at its midpoint, ordered
    /// `[NE, NW, SW, SE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::nbody::Bounds;
    ///
    /// let [ne, nw, sw, se] = Bounds::new(0.0, 0.0, 2.0, 2.0).split4();
    /// assert_eq!(ne, Bounds::new(1.0, 1.0, 2.0, 2.0));
    /// assert_eq!(nw, Bounds::new(0.0, 1.0, 1.0, 2.0));
    /// assert_eq!(sw, Bounds::new(0.0, 0.0, 1.0, 1.0));
    /// assert_eq!(se, Bounds::new(1.0, 0.0, 2.0, 1.0));
    /// ```
    pub fn split4(&self) -> [Bounds; 4] {
        let (mx, my) = self.center();
        [
            Bounds::new(mx, my, self.x1, self.y1), // NE
            Bounds::new(self.x0, my, mx, self.y1), // NW
            Bounds::new(self.x0, self.y0, mx, my), // SW
            Bounds::new(mx, self.y0, self.x1, my), // SE
        ]
    }

    /// Tight bounding box of a body slice.
    ///
    /// # Errors
    ///
    /// Returns `EmptyBodySet` for an empty slice.
    pub fn enclosing(bodies: &[Body]) -> Result<Bounds, NBodyError> {
        let first = bodies.first().ok_or(NBodyError::EmptyBodySet)?;
        let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
        for p in bodies {
            if p.x < bounds.x0 {
                bounds.x0 = p.x;
            } else if p.x > bounds.x1 {
                bounds.x1 = p.x;
            }
            if p.y < bounds.y0 {
                bounds.y0 = p.y;
            } else if p.y > bounds.y1 {
                bounds.y1 = p.y;
            }
        }
        Ok(bounds)
    }
}
