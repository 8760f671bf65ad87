//! # hullres
//!
//! Calm-water resistance and effective towing power estimation for
//! displacement hulls.
//!
//! This crate provides the building blocks of a resistance prediction
//! pipeline:
//! - Hull geometry validation and hydrostatic derivation
//! - Simplified Holtrop & Mennen (1984) resistance curves
//! - Quadratic quick-estimate curves
//! - Dimensionless-number helpers (Froude, Reynolds)
//! - CSV export, result tables, and plot series bundles
//!
//! # Example
//!
//! ```
//! use hullres::{HullGeometry, Locale, ResistanceEngine, speed_sweep};
//!
//! let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70)?;
//! println!("{}", hull.summary(Locale::English));
//!
//! let mut engine = ResistanceEngine::new(&hull);
//! let speeds = speed_sweep(2.0, 20.0, 30);
//! engine.compute_holtrop(&speeds)?;
//! println!("{}", engine.summary_table(Locale::English)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod hull;
pub mod io;
pub mod report;
pub mod resistance;
pub mod water;

// Re-export main types for convenience
pub use hull::{HullGeometry, HullOverrides, SpeedRange, ValidationError, Violation};
pub use io::ExportError;
pub use report::plot::{Chart, PlotBundle, Series};
pub use report::{Labels, Locale, UnknownLocale};
pub use resistance::{
    speed_sweep, CurveStats, HoltropCoefficients, Method, ResistanceEngine, ResistanceError,
    ResultSet, ViscousBreakdown,
};
