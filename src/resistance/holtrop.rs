//! Simplified Holtrop & Mennen (1984) resistance components.
//!
//! Covers the frictional line and the residual-resistance regression for
//! bare displacement hulls. Appendage, bulbous-bow, and transom
//! corrections of the full method are not part of this variant.
//!
//! # References
//!
//! - Holtrop, J. & Mennen, G.G.J. (1982/1984): An approximate power
//!   prediction method.
//! - ITTC (1957): model-ship correlation line.

use crate::hull::HullGeometry;
use crate::water::{GRAVITY, SEAWATER_DENSITY};

/// ITTC-1957 model-ship correlation line CF = 0.075 / (log₁₀(Rn) − 2)².
///
/// Returns `None` when the denominator vanishes (Rn = 100, a physically
/// meaningless regime for any real speed/length product) so the caller
/// can surface a domain error instead of an infinity.
pub fn ittc57_friction_coefficient(reynolds: f64) -> Option<f64> {
    let denom = reynolds.log10() - 2.0;
    if denom.abs() < 1e-9 {
        return None;
    }
    Some(0.075 / (denom * denom))
}

/// Speed-independent constants of the residual-resistance regression.
///
/// Computed once per curve evaluation; only the Froude term varies with
/// speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoltropCoefficients {
    /// Hull-form factor from beam/length ratio and entrance angle.
    pub c1: f64,
    /// Exponential damping of c1.
    pub c2: f64,
    /// Section-shape factor from beam, draft, and volume.
    pub c3: f64,
    /// Slenderness ratio L³/V.
    pub c12: f64,
    /// Buoyancy-center correction.
    pub c13: f64,
}

impl HoltropCoefficients {
    /// Evaluate the regression constants for a hull.
    pub fn for_hull(hull: &HullGeometry) -> Self {
        let l = hull.length();
        let b = hull.beam();
        let t = hull.draft();
        let v = hull.displaced_volume();

        // Entrance-angle term fixed at 89.7° in this simplified variant;
        // LCB enters c13 as a percentage value, not a fraction.
        let c1 = 2223105.0 * (b / l).powf(1.07961) * 89.7_f64.powf(-1.37565);
        let c2 = (-1.89 * c1.sqrt()).exp();
        let bt = b * t;
        let c3 = 0.56 * bt.powf(1.5) / (v * (0.31 * bt.sqrt() + t));
        let c12 = l.powi(3) / v;
        let c13 = 1.0 + 0.003 * hull.lcb_percent();

        Self { c1, c2, c3, c12, c13 }
    }

    /// Residual resistance RR(Fn) in newtons.
    ///
    /// RR = V·ρ·g·c2·c3·c12^0.004·exp(−0.9/Fn)·c13. Defined as exactly
    /// zero at Fn = 0 (the exponential's zero-speed limit) so the curve
    /// stays finite at the boundary.
    pub fn residual_resistance(&self, hull: &HullGeometry, froude: f64) -> f64 {
        if froude <= 0.0 {
            return 0.0;
        }
        hull.displaced_volume()
            * SEAWATER_DENSITY
            * GRAVITY
            * self.c2
            * self.c3
            * self.c12.powf(0.004)
            * (-0.9 / froude).exp()
            * self.c13
    }
}
