//! Resistance and effective-power curves over a speed sweep.
//!
//! [`ResistanceEngine`] wraps a frozen [`HullGeometry`] and evaluates one
//! of two methods over a sequence of speeds:
//!
//! - [`ResistanceEngine::compute_holtrop`] — simplified Holtrop & Mennen
//!   with a frictional/residual breakdown,
//! - [`ResistanceEngine::compute_simple`] — quadratic lump estimate.
//!
//! Each call replaces the engine's stored [`ResultSet`]; export, table,
//! and plot accessors operate on that stored set and fail with
//! [`ResistanceError::NoResult`] before the first successful compute.
//!
//! # Example
//!
//! ```
//! use hullres::{HullGeometry, ResistanceEngine, speed_sweep};
//!
//! let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
//! let mut engine = ResistanceEngine::new(&hull);
//! let speeds = speed_sweep(5.0, 20.0, 30);
//! let results = engine.compute_holtrop(&speeds).unwrap();
//! assert_eq!(results.len(), 30);
//! ```

mod holtrop;
mod simple;

pub use holtrop::{ittc57_friction_coefficient, HoltropCoefficients};

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::hull::HullGeometry;
use crate::io::csv::{self, ExportError};
use crate::report::plot::{self, PlotBundle};
use crate::report::{self, Locale};
use crate::water::{froude_number, reynolds_number, MPS_TO_KNOTS, SEAWATER_DENSITY};

/// Selectable resistance estimation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Simplified Holtrop & Mennen (1984) with viscous breakdown.
    Holtrop,
    /// Quadratic lump estimate.
    Simple,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Holtrop => write!(f, "Holtrop & Mennen"),
            Method::Simple => write!(f, "Simple"),
        }
    }
}

/// Error type for curve computation and result access.
#[derive(Debug, Error)]
pub enum ResistanceError {
    /// A result accessor was called before any compute succeeded.
    #[error("no results available; run a compute method first")]
    NoResult,

    /// The speed sweep was empty.
    #[error("speed sweep must contain at least one sample")]
    EmptySpeeds,

    /// A speed sample was NaN or infinite.
    #[error("speed at index {index} is not finite ({speed})")]
    NonFiniteSpeed { index: usize, speed: f64 },

    /// A speed sample was negative; reverse flow is outside the model.
    #[error("speed at index {index} is negative ({speed} m/s); resistance is undefined for reverse flow")]
    NegativeSpeed { index: usize, speed: f64 },

    /// A speed drove the Reynolds number to 100, where the ITTC-1957
    /// friction line is singular.
    #[error("speed {speed} m/s at index {index} puts the Reynolds number at 100, where the ITTC-1957 friction line is singular")]
    FrictionSingularity { index: usize, speed: f64 },
}

/// Viscous component curves, present for the Holtrop method only.
#[derive(Clone, Debug, PartialEq)]
pub struct ViscousBreakdown {
    /// Reynolds number per sample.
    pub reynolds: Vec<f64>,
    /// ITTC-1957 friction coefficient per sample.
    pub cf: Vec<f64>,
    /// Frictional resistance RF (N) per sample.
    pub friction_n: Vec<f64>,
    /// Residual resistance RR (N) per sample.
    pub residual_n: Vec<f64>,
}

/// One computed curve set: parallel sequences, one entry per input speed.
///
/// The same index across every field refers to the same speed sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    /// Method that produced this set.
    pub method: Method,
    /// Speed in m/s (the input sweep).
    pub speed_mps: Vec<f64>,
    /// Speed in knots (m/s × 1.944).
    pub speed_knots: Vec<f64>,
    /// Froude number per sample.
    pub froude: Vec<f64>,
    /// Viscous breakdown; `None` for the simple method.
    pub viscous: Option<ViscousBreakdown>,
    /// Total resistance RT (N).
    pub total_n: Vec<f64>,
    /// Total resistance RT (kN).
    pub total_kn: Vec<f64>,
    /// Effective towing power (kW).
    pub power_kw: Vec<f64>,
}

impl ResultSet {
    /// Number of speed samples.
    pub fn len(&self) -> usize {
        self.speed_mps.len()
    }

    /// Whether the set holds no samples. Never true for sets produced by
    /// the engine, which rejects empty sweeps.
    pub fn is_empty(&self) -> bool {
        self.speed_mps.is_empty()
    }

    /// Summary statistics over the whole curve.
    pub fn stats(&self) -> CurveStats {
        let mut max_total_kn = f64::NEG_INFINITY;
        let mut speed_at_max_knots = 0.0;
        for (i, &rt) in self.total_kn.iter().enumerate() {
            if rt > max_total_kn {
                max_total_kn = rt;
                speed_at_max_knots = self.speed_knots[i];
            }
        }
        let max_power_kw = self.power_kw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let froude_min = self.froude.iter().copied().fold(f64::INFINITY, f64::min);
        let froude_max = self.froude.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        CurveStats {
            max_total_kn,
            max_power_kw,
            speed_at_max_knots,
            froude_min,
            froude_max,
        }
    }
}

/// Headline numbers of a computed curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStats {
    /// Largest total resistance (kN).
    pub max_total_kn: f64,
    /// Largest effective power (kW).
    pub max_power_kw: f64,
    /// Speed (knots) at the largest total resistance.
    pub speed_at_max_knots: f64,
    /// Smallest Froude number in the sweep.
    pub froude_min: f64,
    /// Largest Froude number in the sweep.
    pub froude_max: f64,
}

/// Resistance calculator bound to one frozen hull geometry.
///
/// Engines are independent; several may share the same geometry
/// concurrently since the geometry is read-only after construction.
#[derive(Clone, Debug)]
pub struct ResistanceEngine<'a> {
    hull: &'a HullGeometry,
    results: Option<ResultSet>,
}

impl<'a> ResistanceEngine<'a> {
    /// Create an engine with no stored results.
    pub fn new(hull: &'a HullGeometry) -> Self {
        Self { hull, results: None }
    }

    /// The hull this engine computes for.
    pub fn hull(&self) -> &HullGeometry {
        self.hull
    }

    /// The most recently computed curve set, if any.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Evaluate the simplified Holtrop & Mennen method over a speed sweep
    /// (m/s), replacing any previously stored results.
    ///
    /// # Errors
    ///
    /// Rejects empty sweeps, non-finite or negative speeds, and speeds
    /// driving the friction line to its Rn = 100 singularity. On error
    /// the previously stored results are left untouched.
    pub fn compute_holtrop(&mut self, speeds: &[f64]) -> Result<&ResultSet, ResistanceError> {
        validate_speeds(speeds)?;

        let n = speeds.len();
        let coeffs = HoltropCoefficients::for_hull(self.hull);

        let mut froude = Vec::with_capacity(n);
        let mut reynolds = Vec::with_capacity(n);
        let mut cf = Vec::with_capacity(n);
        let mut friction_n = Vec::with_capacity(n);
        let mut residual_n = Vec::with_capacity(n);
        let mut total_n = Vec::with_capacity(n);

        for (index, &speed) in speeds.iter().enumerate() {
            let fr = froude_number(speed, self.hull.length());

            let (rn, cfi, rf, rr) = if speed == 0.0 {
                // Zero-speed boundary: every component vanishes
                (0.0, 0.0, 0.0, 0.0)
            } else {
                let rn = reynolds_number(speed, self.hull.length());
                let cfi = ittc57_friction_coefficient(rn)
                    .ok_or(ResistanceError::FrictionSingularity { index, speed })?;
                let rf = 0.5
                    * SEAWATER_DENSITY
                    * speed
                    * speed
                    * self.hull.wetted_surface()
                    * cfi;
                let rr = coeffs.residual_resistance(self.hull, fr);
                (rn, cfi, rf, rr)
            };

            froude.push(fr);
            reynolds.push(rn);
            cf.push(cfi);
            friction_n.push(rf);
            residual_n.push(rr);
            total_n.push(rf + rr);
        }

        let results = ResultSet {
            method: Method::Holtrop,
            speed_knots: speeds.iter().map(|&v| v * MPS_TO_KNOTS).collect(),
            speed_mps: speeds.to_vec(),
            froude,
            viscous: Some(ViscousBreakdown {
                reynolds,
                cf,
                friction_n,
                residual_n,
            }),
            total_kn: total_n.iter().map(|&rt| rt / 1000.0).collect(),
            power_kw: total_n
                .iter()
                .zip(speeds.iter())
                .map(|(&rt, &v)| rt * v / 1000.0)
                .collect(),
            total_n,
        };

        debug!(samples = n, method = %Method::Holtrop, "computed resistance curve");
        Ok(&*self.results.insert(results))
    }

    /// Evaluate the quadratic estimate over a speed sweep (m/s), replacing
    /// any previously stored results.
    ///
    /// # Errors
    ///
    /// Rejects empty sweeps and non-finite or negative speeds.
    pub fn compute_simple(&mut self, speeds: &[f64]) -> Result<&ResultSet, ResistanceError> {
        validate_speeds(speeds)?;

        let n = speeds.len();
        let mut froude = Vec::with_capacity(n);
        let mut total_n = Vec::with_capacity(n);

        for &speed in speeds {
            let fr = froude_number(speed, self.hull.length());
            froude.push(fr);
            total_n.push(simple::total_resistance(self.hull, speed, fr));
        }

        let results = ResultSet {
            method: Method::Simple,
            speed_knots: speeds.iter().map(|&v| v * MPS_TO_KNOTS).collect(),
            speed_mps: speeds.to_vec(),
            froude,
            viscous: None,
            total_kn: total_n.iter().map(|&rt| rt / 1000.0).collect(),
            power_kw: total_n
                .iter()
                .zip(speeds.iter())
                .map(|(&rt, &v)| rt * v / 1000.0)
                .collect(),
            total_n,
        };

        debug!(samples = n, method = %Method::Simple, "computed resistance curve");
        Ok(&*self.results.insert(results))
    }

    /// Serialize the stored results as CSV.
    ///
    /// With no path given, writes `resistance_results_<YYYYMMDD_HHMMSS>.csv`
    /// in the working directory and returns the chosen path.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoResult`] before the first compute; I/O failures
    /// are passed through.
    pub fn export_csv(&self, path: Option<&Path>) -> Result<PathBuf, ExportError> {
        let results = self.results.as_ref().ok_or(ExportError::NoResult)?;
        csv::write_csv(results, path)
    }

    /// Fixed-width table of at most the first 10 samples.
    ///
    /// The locale selects the column labels only.
    pub fn summary_table(&self, locale: Locale) -> Result<String, ResistanceError> {
        let results = self.current()?;
        Ok(report::results_table(results, locale))
    }

    /// Series bundles for an external plotting collaborator.
    pub fn plot_data(&self, locale: Locale) -> Result<PlotBundle, ResistanceError> {
        let results = self.current()?;
        Ok(plot::plot_bundle(results, locale))
    }

    /// Summary statistics of the stored curve.
    pub fn stats(&self) -> Result<CurveStats, ResistanceError> {
        Ok(self.current()?.stats())
    }

    fn current(&self) -> Result<&ResultSet, ResistanceError> {
        self.results.as_ref().ok_or(ResistanceError::NoResult)
    }
}

fn validate_speeds(speeds: &[f64]) -> Result<(), ResistanceError> {
    if speeds.is_empty() {
        return Err(ResistanceError::EmptySpeeds);
    }
    for (index, &speed) in speeds.iter().enumerate() {
        if !speed.is_finite() {
            return Err(ResistanceError::NonFiniteSpeed { index, speed });
        }
        if speed < 0.0 {
            return Err(ResistanceError::NegativeSpeed { index, speed });
        }
    }
    Ok(())
}

/// Linear speed sweep from `min_knots` to `max_knots`, returned in m/s.
///
/// With a single point, returns just the minimum; with zero points,
/// returns an empty sweep (which the engine rejects).
pub fn speed_sweep(min_knots: f64, max_knots: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min_knots / MPS_TO_KNOTS],
        _ => {
            let step = (max_knots - min_knots) / (points - 1) as f64;
            (0..points)
                .map(|i| (min_knots + step * i as f64) / MPS_TO_KNOTS)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::KINEMATIC_VISCOSITY;

    const TOL: f64 = 1e-10;

    fn reference_hull() -> HullGeometry {
        HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap()
    }

    #[test]
    fn test_engine_starts_empty() {
        let hull = reference_hull();
        let engine = ResistanceEngine::new(&hull);
        assert!(engine.results().is_none());
        assert!(matches!(engine.stats(), Err(ResistanceError::NoResult)));
        assert!(matches!(
            engine.summary_table(Locale::English),
            Err(ResistanceError::NoResult)
        ));
        assert!(matches!(
            engine.plot_data(Locale::English),
            Err(ResistanceError::NoResult)
        ));
    }

    #[test]
    fn test_holtrop_reference_point() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        let results = engine.compute_holtrop(&[7.5]).unwrap();

        assert_eq!(results.method, Method::Holtrop);
        assert!((results.froude[0] - 0.1956).abs() < 5e-4);
        assert!((results.speed_knots[0] - 7.5 * 1.944).abs() < TOL);

        let viscous = results.viscous.as_ref().unwrap();
        let rf = viscous.friction_n[0];
        let rr = viscous.residual_n[0];
        assert!(rf > 0.0 && rf.is_finite());
        assert!(rr > 0.0 && rr.is_finite());
        // RT = RF + RR must hold exactly, not within tolerance
        assert_eq!(results.total_n[0], rf + rr);
        assert_eq!(results.total_kn[0], results.total_n[0] / 1000.0);
        assert_eq!(results.power_kw[0], results.total_n[0] * 7.5 / 1000.0);
    }

    #[test]
    fn test_holtrop_zero_speed_boundary() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        let results = engine.compute_holtrop(&[0.0, 5.0]).unwrap();

        let viscous = results.viscous.as_ref().unwrap();
        assert_eq!(results.froude[0], 0.0);
        assert_eq!(viscous.reynolds[0], 0.0);
        assert_eq!(viscous.cf[0], 0.0);
        assert_eq!(viscous.friction_n[0], 0.0);
        assert_eq!(viscous.residual_n[0], 0.0);
        assert_eq!(results.total_n[0], 0.0);
        assert_eq!(results.power_kw[0], 0.0);
        assert!(results.total_n[1] > 0.0);
    }

    #[test]
    fn test_simple_zero_speed() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        let results = engine.compute_simple(&[0.0]).unwrap();

        assert_eq!(results.froude[0], 0.0);
        assert_eq!(results.total_n[0], 0.0);
        assert_eq!(results.power_kw[0], 0.0);
        assert!(results.viscous.is_none());
    }

    #[test]
    fn test_empty_sweep_rejected() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        assert!(matches!(
            engine.compute_holtrop(&[]),
            Err(ResistanceError::EmptySpeeds)
        ));
        assert!(matches!(
            engine.compute_simple(&[]),
            Err(ResistanceError::EmptySpeeds)
        ));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        let err = engine.compute_holtrop(&[5.0, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            ResistanceError::NegativeSpeed { index: 1, .. }
        ));
    }

    #[test]
    fn test_non_finite_speed_rejected() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        assert!(matches!(
            engine.compute_simple(&[5.0, f64::NAN]),
            Err(ResistanceError::NonFiniteSpeed { index: 1, .. })
        ));
        assert!(matches!(
            engine.compute_holtrop(&[f64::INFINITY]),
            Err(ResistanceError::NonFiniteSpeed { index: 0, .. })
        ));
    }

    #[test]
    fn test_friction_singularity_rejected() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        // The speed that puts Rn exactly at 100
        let singular_speed = 100.0 * KINEMATIC_VISCOSITY / hull.length();
        let err = engine.compute_holtrop(&[singular_speed]).unwrap_err();
        assert!(matches!(err, ResistanceError::FrictionSingularity { index: 0, .. }));
        // The failed compute must not store a partial curve
        assert!(engine.results().is_none());
    }

    #[test]
    fn test_recompute_replaces_results() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        engine.compute_holtrop(&[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(engine.results().unwrap().len(), 3);

        engine.compute_simple(&[4.0]).unwrap();
        let results = engine.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.method, Method::Simple);
        assert!(results.viscous.is_none());
    }

    #[test]
    fn test_stats() {
        let hull = reference_hull();
        let mut engine = ResistanceEngine::new(&hull);
        engine.compute_holtrop(&[5.0, 7.5, 10.0]).unwrap();
        let stats = engine.stats().unwrap();

        let results = engine.results().unwrap();
        assert_eq!(stats.max_total_kn, results.total_kn[2]);
        assert_eq!(stats.max_power_kw, results.power_kw[2]);
        assert!((stats.speed_at_max_knots - 10.0 * MPS_TO_KNOTS).abs() < TOL);
        assert_eq!(stats.froude_min, results.froude[0]);
        assert_eq!(stats.froude_max, results.froude[2]);
    }

    #[test]
    fn test_speed_sweep() {
        let sweep = speed_sweep(2.0, 20.0, 10);
        assert_eq!(sweep.len(), 10);
        assert!((sweep[0] - 2.0 / MPS_TO_KNOTS).abs() < TOL);
        assert!((sweep[9] - 20.0 / MPS_TO_KNOTS).abs() < TOL);
        // Uniform spacing
        let step = sweep[1] - sweep[0];
        for pair in sweep.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }

        assert_eq!(speed_sweep(2.0, 20.0, 0).len(), 0);
        let single = speed_sweep(5.0, 20.0, 1);
        assert_eq!(single.len(), 1);
        assert!((single[0] - 5.0 / MPS_TO_KNOTS).abs() < TOL);
    }

    #[test]
    fn test_two_engines_share_one_geometry() {
        let hull = reference_hull();
        let mut first = ResistanceEngine::new(&hull);
        let mut second = ResistanceEngine::new(&hull);

        first.compute_holtrop(&[5.0]).unwrap();
        second.compute_simple(&[5.0]).unwrap();

        assert_eq!(first.results().unwrap().method, Method::Holtrop);
        assert_eq!(second.results().unwrap().method, Method::Simple);
    }
}
