//! Command-line front end for the resistance estimator.
//!
//! Collects hull dimensions and sweep settings as flags, runs one of the
//! two methods, and prints the hull summary, the results table, and the
//! curve statistics. Optionally exports the curve as CSV.
//!
//! ```bash
//! hullres -L 150 -B 20 -T 8 --cb 0.70 --method holtrop --points 30
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hullres::{speed_sweep, HullGeometry, HullOverrides, Locale, ResistanceEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calm-water hull resistance and towing power estimator")]
struct Cli {
    /// Waterline length in meters.
    #[arg(short = 'L', long)]
    length: f64,

    /// Beam in meters.
    #[arg(short = 'B', long)]
    beam: f64,

    /// Draft in meters.
    #[arg(short = 'T', long)]
    draft: f64,

    /// Block coefficient (0.3 to 1.0).
    #[arg(long)]
    cb: f64,

    /// Midship coefficient override.
    #[arg(long)]
    cm: Option<f64>,

    /// Longitudinal center of buoyancy override (% of L).
    #[arg(long)]
    lcb: Option<f64>,

    /// Displaced volume override (m³).
    #[arg(long)]
    volume: Option<f64>,

    /// Wetted surface area override (m²).
    #[arg(long)]
    wetted_surface: Option<f64>,

    /// Propeller disk area override (m²).
    #[arg(long)]
    propeller_area: Option<f64>,

    /// Resistance estimation method.
    #[arg(long, value_enum, default_value_t = MethodArg::Holtrop)]
    method: MethodArg,

    /// Label language for the printed report (english, portuguese).
    #[arg(long, default_value = "english")]
    locale: String,

    /// Minimum speed in knots (defaults to the hull recommendation).
    #[arg(long)]
    min_speed: Option<f64>,

    /// Maximum speed in knots (defaults to the hull recommendation).
    #[arg(long)]
    max_speed: Option<f64>,

    /// Number of samples across the sweep.
    #[arg(long, default_value_t = 30)]
    points: usize,

    /// Export the curve as CSV, optionally to an explicit path.
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    export: Option<PathBuf>,

    /// Skip the results table.
    #[arg(long)]
    no_table: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    /// Simplified Holtrop & Mennen with friction/residual breakdown.
    Holtrop,
    /// Quadratic quick estimate.
    Simple,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let locale: Locale = cli.locale.parse()?;
    let labels = locale.labels();

    let overrides = HullOverrides {
        midship_coefficient: cli.cm,
        lcb_percent: cli.lcb,
        displaced_volume: cli.volume,
        wetted_surface: cli.wetted_surface,
        propeller_area: cli.propeller_area,
    };
    let hull = HullGeometry::with_overrides(cli.length, cli.beam, cli.draft, cli.cb, overrides)?;

    println!("{}\n", hull.summary(locale));

    let range = hull.recommended_speed_range();
    println!("{} (CB={:.3}):", labels.recommendation_header, hull.block_coefficient());
    println!(
        "  {}: {:.1} {}",
        labels.recommended_max_speed, range.max_knots, labels.knots_unit
    );
    println!(
        "  {}: {:.1} {}",
        labels.suggested_min_speed, range.min_knots, labels.knots_unit
    );
    println!("  {}: {:.2}\n", labels.max_froude, range.max_froude);

    let min_knots = cli.min_speed.unwrap_or(range.min_knots);
    let max_knots = cli.max_speed.unwrap_or(range.max_knots);
    let speeds = speed_sweep(min_knots, max_knots, cli.points);

    let mut engine = ResistanceEngine::new(&hull);
    match cli.method {
        MethodArg::Holtrop => engine.compute_holtrop(&speeds)?,
        MethodArg::Simple => engine.compute_simple(&speeds)?,
    };

    if !cli.no_table {
        println!("{}", engine.summary_table(locale)?);
    }

    let stats = engine.stats()?;
    println!("{}:", labels.stats_header);
    println!(
        "  {}: {:.1} kN {} {:.1} {}",
        labels.max_resistance,
        stats.max_total_kn,
        labels.at_word,
        stats.speed_at_max_knots,
        labels.knots_unit
    );
    println!("  {}: {:.1} kW", labels.max_power, stats.max_power_kw);
    println!(
        "  {}: {:.3} - {:.3}",
        labels.froude_range, stats.froude_min, stats.froude_max
    );

    if let Some(export) = cli.export {
        let target = if export.as_os_str().is_empty() {
            None
        } else {
            Some(export.as_path())
        };
        let written = engine
            .export_csv(target)
            .context("failed to export the resistance curve")?;
        println!("\nCSV: {}", written.display());
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
