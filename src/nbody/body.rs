use crate::utils::SimConstants;

/// Reserved id carried by synthetic aggregate bodies (center-of-mass stand-ins
/// produced by the quadtree). Caller-assigned ids must not use this value.
pub const AGGREGATE_ID: u64 = u64::MAX;

/// A point mass in 2D space.
///
/// A `Body` is a plain value: a simulation step never mutates it in place but
/// produces a new `Body` for the next instant. The `id` field is the body's
/// identity; it is what excludes a body from its own source list, since two
/// distinct bodies may occupy the exact same position.
///
/// # Examples
///
/// ```
/// use rs_nbody::nbody::Body;
///
/// let sun = Body::at_rest(0, 1.0, 0.0, 0.0);
/// let earth = Body::new(1, 3.0e-6, 1.0, 0.0, 0.0, 6.28);
/// assert_eq!(sun.square_dist(&earth), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: u64,
    /// Mass in solar masses.
    pub mass: f64,
    /// Position in AU.
    pub x: f64,
    pub y: f64,
    /// Velocity in AU/yr.
    pub vx: f64,
    pub vy: f64,
}

impl Body {
    pub fn new(id: u64, mass: f64, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Body { id, mass, x, y, vx, vy }
    }

    /// Creates a body with zero initial velocity.
    pub fn at_rest(id: u64, mass: f64, x: f64, y: f64) -> Self {
        Body::new(id, mass, x, y, 0.0, 0.0)
    }

    /// Creates a synthetic aggregate body representing the total mass and
    /// centroid of a subtree. Aggregates never match a real body's id.
    pub fn aggregate(mass: f64, x: f64, y: f64) -> Self {
        Body::new(AGGREGATE_ID, mass, x, y, 0.0, 0.0)
    }

    pub fn is_aggregate(&self) -> bool {
        self.id == AGGREGATE_ID
    }

    /// Squared Euclidean distance to another body.
    pub fn square_dist(&self, other: &Body) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Computes this body's state after a time step `dt`, under the gravity of
    /// `sources`.
    ///
    /// Every source with a different id contributes an acceleration term from
    /// Newton's law of gravitation. The position update folds the previous
    /// velocity into the displacement before acceleration is applied, and the
    /// new velocity is recovered from the realized displacement:
    ///
    /// ```text
    /// x' = x + dt^2 * ax + dt * vx
    /// vx' = (x' - x) / dt
    /// ```
    ///
    /// Two bodies at zero separation are not guarded against: the acceleration
    /// term becomes non-finite and propagates through position and velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::nbody::Body;
    /// use rs_nbody::utils::SimConstants;
    ///
    /// let constants = SimConstants::default();
    /// let a = Body::at_rest(0, 1.0, 0.0, 0.0);
    /// let b = Body::at_rest(1, 1.0, 10.0, 0.0);
    /// let next = a.next(&[b], 0.01, &constants);
    /// assert!(next.x > 0.0, "Body should be pulled toward the other mass");
    /// ```
    pub fn next(&self, sources: &[Body], dt: f64, constants: &SimConstants) -> Body {
        let mut ax = 0.0;
        let mut ay = 0.0;
        for p in sources {
            if p.id == self.id {
                continue;
            }
            let sq_dist = self.square_dist(p);
            let scale = p.mass * constants.g / sq_dist.powf(1.5);
            ax += (p.x - self.x) * scale;
            ay += (p.y - self.y) * scale;
        }

        let x = self.x + dt * dt * ax + dt * self.vx;
        let y = self.y + dt * dt * ay + dt * self.vy;

        Body {
            id: self.id,
            mass: self.mass,
            x,
            y,
            vx: (x - self.x) / dt,
            vy: (y - self.y) / dt,
        }
    }
}
