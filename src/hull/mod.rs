//! Hull principal dimensions and derived hydrostatic quantities.
//!
//! [`HullGeometry`] is built from the minimal input set (waterline length,
//! beam, draft, block coefficient); every other quantity is either supplied
//! explicitly or derived from merchant-ship regressions at construction
//! time. A geometry is validated and completed exactly once and is
//! read-only afterwards — build a new one for each distinct hull.
//!
//! # Example
//!
//! ```
//! use hullres::HullGeometry;
//!
//! let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
//! assert_eq!(hull.displaced_volume(), 150.0 * 20.0 * 8.0 * 0.70);
//! assert!(hull.wetted_surface() > 0.0);
//! ```

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

use crate::report::Locale;
use crate::water::{GRAVITY, MPS_TO_KNOTS};

/// A single violated constraint on the required hull dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// Waterline length was zero or negative.
    NonPositiveLength(f64),
    /// Beam was zero or negative.
    NonPositiveBeam(f64),
    /// Draft was zero or negative.
    NonPositiveDraft(f64),
    /// Block coefficient outside the supported 0.3..=1.0 range.
    BlockCoefficientOutOfRange(f64),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NonPositiveLength(l) => {
                write!(f, "waterline length must be positive (got {l})")
            }
            Violation::NonPositiveBeam(b) => write!(f, "beam must be positive (got {b})"),
            Violation::NonPositiveDraft(t) => write!(f, "draft must be positive (got {t})"),
            Violation::BlockCoefficientOutOfRange(cb) => {
                write!(f, "block coefficient (CB={cb}) must lie between 0.3 and 1.0")
            }
        }
    }
}

/// Construction failure carrying every violated constraint, not just the
/// first one found.
#[derive(Debug, Error)]
#[error("{}", render_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// All violations found during construction, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn render_violations(violations: &[Violation]) -> String {
    let mut msg = String::from("invalid hull parameters:");
    for v in violations {
        msg.push_str("\n  - ");
        msg.push_str(&v.to_string());
    }
    if violations
        .iter()
        .any(|v| matches!(v, Violation::BlockCoefficientOutOfRange(_)))
    {
        msg.push_str("\n  hint: fast displacement hulls typically use CB between 0.35 and 0.45");
    }
    msg
}

/// Optional overrides for the quantities normally derived at construction.
///
/// Any field left as `None` is filled in by [`HullGeometry::with_overrides`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HullOverrides {
    /// Midship section coefficient CM.
    pub midship_coefficient: Option<f64>,
    /// Longitudinal center of buoyancy, in percent of L.
    pub lcb_percent: Option<f64>,
    /// Displaced volume (m³).
    pub displaced_volume: Option<f64>,
    /// Wetted surface area (m²).
    pub wetted_surface: Option<f64>,
    /// Propeller disk area (m²).
    pub propeller_area: Option<f64>,
}

/// Recommended analysis speed window for a hull, based on its fullness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    /// Practical minimum analysis speed (knots).
    pub min_knots: f64,
    /// Recommended maximum analysis speed (knots).
    pub max_knots: f64,
    /// Froude number at the recommended maximum.
    pub max_froude: f64,
}

/// Principal dimensions and hydrostatics of a displacement hull.
///
/// All lengths in meters, areas in m², volumes in m³. Fields are frozen
/// once construction succeeds; only accessors are exposed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullGeometry {
    length: f64,
    beam: f64,
    draft: f64,
    block_coefficient: f64,
    midship_coefficient: f64,
    lcb_percent: f64,
    displaced_volume: f64,
    wetted_surface: f64,
    propeller_area: f64,
}

impl HullGeometry {
    /// Build a geometry from the minimal input set, deriving everything else.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated constraint when
    /// any of L, B, T is non-positive or CB falls outside 0.3..=1.0.
    pub fn new(
        length: f64,
        beam: f64,
        draft: f64,
        block_coefficient: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_overrides(length, beam, draft, block_coefficient, HullOverrides::default())
    }

    /// Build a geometry with explicit values for some derived quantities.
    ///
    /// Derivation order matters only for the wetted surface, which needs the
    /// displaced volume: V is resolved first, then S, then the independent
    /// CM, LCB, and propeller-area defaults.
    pub fn with_overrides(
        length: f64,
        beam: f64,
        draft: f64,
        block_coefficient: f64,
        overrides: HullOverrides,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        // Written with negated comparisons so NaN inputs also fail.
        if !(length > 0.0) {
            violations.push(Violation::NonPositiveLength(length));
        }
        if !(beam > 0.0) {
            violations.push(Violation::NonPositiveBeam(beam));
        }
        if !(draft > 0.0) {
            violations.push(Violation::NonPositiveDraft(draft));
        }
        if !(0.3..=1.0).contains(&block_coefficient) {
            violations.push(Violation::BlockCoefficientOutOfRange(block_coefficient));
        }

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        let displaced_volume = overrides
            .displaced_volume
            .unwrap_or(length * beam * draft * block_coefficient);
        let wetted_surface = overrides.wetted_surface.unwrap_or_else(|| {
            holtrop_wetted_surface(length, beam, draft, block_coefficient, displaced_volume)
        });
        let midship_coefficient = overrides.midship_coefficient.unwrap_or(0.98);
        let lcb_percent = overrides.lcb_percent.unwrap_or(0.5);
        let propeller_area = overrides
            .propeller_area
            .unwrap_or_else(|| 0.5 * PI * (0.7 * draft).powi(2));

        Ok(Self {
            length,
            beam,
            draft,
            block_coefficient,
            midship_coefficient,
            lcb_percent,
            displaced_volume,
            wetted_surface,
            propeller_area,
        })
    }

    /// Waterline length L (m).
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Beam B (m).
    #[inline]
    pub fn beam(&self) -> f64 {
        self.beam
    }

    /// Draft T (m).
    #[inline]
    pub fn draft(&self) -> f64 {
        self.draft
    }

    /// Block coefficient CB.
    #[inline]
    pub fn block_coefficient(&self) -> f64 {
        self.block_coefficient
    }

    /// Midship section coefficient CM.
    #[inline]
    pub fn midship_coefficient(&self) -> f64 {
        self.midship_coefficient
    }

    /// Longitudinal center of buoyancy, percent of L.
    #[inline]
    pub fn lcb_percent(&self) -> f64 {
        self.lcb_percent
    }

    /// Displaced volume V (m³).
    #[inline]
    pub fn displaced_volume(&self) -> f64 {
        self.displaced_volume
    }

    /// Wetted surface area S (m²).
    #[inline]
    pub fn wetted_surface(&self) -> f64 {
        self.wetted_surface
    }

    /// Propeller disk area (m²).
    #[inline]
    pub fn propeller_area(&self) -> f64 {
        self.propeller_area
    }

    /// Fixed-precision report of all nine quantities.
    ///
    /// Pure formatting; the locale selects the label set only.
    pub fn summary(&self, locale: Locale) -> String {
        let labels = locale.labels();
        format!(
            "{}\n\
             --------------------\n\
             {}: {:.2} m\n\
             {}: {:.2} m\n\
             {}: {:.2} m\n\
             {}: {:.3}\n\
             {}: {:.3}\n\
             {}: {:.1}% L\n\
             {}: {:.0} m³\n\
             {}: {:.0} m²\n\
             {}: {:.1} m²",
            labels.hull_header,
            labels.length,
            self.length,
            labels.beam,
            self.beam,
            labels.draft,
            self.draft,
            labels.block_coefficient,
            self.block_coefficient,
            labels.midship_coefficient,
            self.midship_coefficient,
            labels.lcb,
            self.lcb_percent,
            labels.displaced_volume,
            self.displaced_volume,
            labels.wetted_surface,
            self.wetted_surface,
            labels.propeller_area,
            self.propeller_area,
        )
    }

    /// Recommended analysis speed window for this hull.
    ///
    /// Full hulls (CB ≥ 0.5) are capped at Fn 0.35, finer hulls at 0.45;
    /// the practical minimum is fixed at 2 knots.
    pub fn recommended_speed_range(&self) -> SpeedRange {
        let max_froude = if self.block_coefficient < 0.5 { 0.45 } else { 0.35 };
        let max_knots = max_froude * (GRAVITY * self.length).sqrt() * MPS_TO_KNOTS;
        SpeedRange {
            min_knots: 2.0,
            max_knots,
            max_froude,
        }
    }
}

/// Holtrop wetted-surface regression for merchant hulls.
///
/// S = L·(2T+B)·√CB·(0.453 + 0.4425·CB − 0.2862·CB² − 0.003467·B/T
///     + 0.3696·CB·B/T) + 2.38·V/(CB·L)
fn holtrop_wetted_surface(length: f64, beam: f64, draft: f64, cb: f64, volume: f64) -> f64 {
    length
        * (2.0 * draft + beam)
        * cb.sqrt()
        * (0.453 + 0.4425 * cb - 0.2862 * cb * cb - 0.003467 * beam / draft
            + 0.3696 * cb * beam / draft)
        + 2.38 * volume / cb / length
}
