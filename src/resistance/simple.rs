//! Quadratic total-resistance estimate for quick early-stage sizing.
//!
//! Lumps friction and residual effects into a single coefficient that
//! grows with the square of the Froude number. Useful before the hull
//! form is settled; the Holtrop method should take over once it is.

use crate::hull::HullGeometry;
use crate::water::SEAWATER_DENSITY;

/// Total resistance RT = 0.5·ρ·v²·S·(0.001 + 0.002·Fn²) in newtons.
pub fn total_resistance(hull: &HullGeometry, speed: f64, froude: f64) -> f64 {
    0.5 * SEAWATER_DENSITY
        * speed
        * speed
        * hull.wetted_surface()
        * (0.001 + 0.002 * froude * froude)
}
