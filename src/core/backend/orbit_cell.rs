use num_complex::Complex64;

/// Squared escape radius; an orbit with `|z| >= 2` diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Working copy of one grid cell while its orbit is being advanced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCell {
    pub index: usize,
    pub c: Complex64,
    pub z: Complex64,
    pub escape_time: u32,
    pub active: bool,
}

impl OrbitCell {
    #[must_use]
    pub fn seed(index: usize, c: Complex64) -> Self {
        Self {
            index,
            c,
            z: Complex64::new(0.0, 0.0),
            escape_time: 0,
            active: true,
        }
    }

    /// One round of `z <- z^2 + c`. Non-finite orbits count as escaped.
    #[inline]
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }

        self.z = self.z * self.z + self.c;
        self.active = self.z.is_finite() && self.z.norm_sqr() < ESCAPE_RADIUS_SQUARED;

        if self.active {
            self.escape_time = self.escape_time.saturating_add(1);
        }
    }
}
