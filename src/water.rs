//! Seawater properties and unit conversions shared by the resistance formulas.
//!
//! All values are for standard seawater at 15 °C, the reference condition
//! of the ITTC-1957 model-ship correlation line.

/// Density of seawater (kg/m³).
pub const SEAWATER_DENSITY: f64 = 1025.0;

/// Kinematic viscosity of seawater at 15 °C (m²/s).
pub const KINEMATIC_VISCOSITY: f64 = 1.1892e-6;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Conversion factor from m/s to knots.
pub const MPS_TO_KNOTS: f64 = 1.944;

/// Froude number Fn = v / √(g·L).
///
/// Governs wave-making resistance scaling. Displacement hulls operate
/// below Fn ≈ 0.4; the residual-resistance regression is calibrated for
/// that regime.
#[inline]
pub fn froude_number(speed: f64, length: f64) -> f64 {
    speed / (GRAVITY * length).sqrt()
}

/// Reynolds number Rn = v·L / ν.
///
/// Governs the viscous flow regime and the friction coefficient.
#[inline]
pub fn reynolds_number(speed: f64, length: f64) -> f64 {
    speed * length / KINEMATIC_VISCOSITY
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_froude_number() {
        // 7.5 m/s on a 150 m waterline
        let froude = froude_number(7.5, 150.0);
        assert!((froude - 7.5 / (9.81f64 * 150.0).sqrt()).abs() < TOL);
        assert!((froude - 0.19552).abs() < 1e-5);
    }

    #[test]
    fn test_froude_zero_speed() {
        assert_eq!(froude_number(0.0, 150.0), 0.0);
    }

    #[test]
    fn test_reynolds_number() {
        let reynolds = reynolds_number(7.5, 150.0);
        assert!((reynolds - 1125.0 / 1.1892e-6).abs() / reynolds < TOL);
        // Full-scale ships sit around 1e9
        assert!(reynolds > 9e8 && reynolds < 1e9);
    }

    #[test]
    fn test_knots_conversion() {
        assert!((10.0 * MPS_TO_KNOTS - 19.44).abs() < TOL);
    }
}
