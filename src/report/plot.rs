//! Series bundles handed to an external plotting collaborator.
//!
//! The crate never renders anything; it supplies the arrays and
//! locale-appropriate labels for the three standard resistance charts
//! and leaves drawing to whatever front end consumes them.

use crate::report::Locale;
use crate::resistance::ResultSet;

/// One labeled data series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// X values.
    pub x: Vec<f64>,
    /// Y values, same length as `x`.
    pub y: Vec<f64>,
}

/// One chart: axis labels plus one or more series.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// The series to draw.
    pub series: Vec<Series>,
}

/// The three standard charts for a computed curve.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotBundle {
    /// Resistance components (kN) vs speed in knots. Holds the total
    /// plus, for the Holtrop method, the friction/residual breakdown.
    pub resistance_breakdown: Chart,
    /// Total resistance (kN) vs Froude number.
    pub resistance_vs_froude: Chart,
    /// Effective power (kW) vs speed in knots.
    pub effective_power: Chart,
}

/// Assemble the three charts from a result set.
pub fn plot_bundle(results: &ResultSet, locale: Locale) -> PlotBundle {
    let labels = locale.labels();

    let mut breakdown = vec![Series {
        label: labels.series_total.to_string(),
        x: results.speed_knots.clone(),
        y: results.total_kn.clone(),
    }];
    if let Some(viscous) = &results.viscous {
        breakdown.push(Series {
            label: labels.series_friction.to_string(),
            x: results.speed_knots.clone(),
            y: viscous.friction_n.iter().map(|&rf| rf / 1000.0).collect(),
        });
        breakdown.push(Series {
            label: labels.series_residual.to_string(),
            x: results.speed_knots.clone(),
            y: viscous.residual_n.iter().map(|&rr| rr / 1000.0).collect(),
        });
    }

    PlotBundle {
        resistance_breakdown: Chart {
            title: labels.plot_title.to_string(),
            x_label: labels.axis_speed_knots.to_string(),
            y_label: labels.axis_resistance_kn.to_string(),
            series: breakdown,
        },
        resistance_vs_froude: Chart {
            title: labels.froude_chart_title.to_string(),
            x_label: labels.axis_froude.to_string(),
            y_label: labels.axis_resistance_kn.to_string(),
            series: vec![Series {
                label: labels.series_total.to_string(),
                x: results.froude.clone(),
                y: results.total_kn.clone(),
            }],
        },
        effective_power: Chart {
            title: labels.power_chart_title.to_string(),
            x_label: labels.axis_speed_knots.to_string(),
            y_label: labels.axis_power_kw.to_string(),
            series: vec![Series {
                label: labels.power_chart_title.to_string(),
                x: results.speed_knots.clone(),
                y: results.power_kw.clone(),
            }],
        },
    }
}
