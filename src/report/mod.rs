//! Locale-aware text output: label tables, result tables.
//!
//! The original tool this crate descends from switched language through a
//! process-global setting; here the [`Locale`] is an explicit parameter on
//! every formatting operation, so the core carries no mutable global
//! state. Only labels change with the locale — numbers, precision, and
//! column order are identical in both languages.

pub mod plot;

use std::str::FromStr;

use thiserror::Error;

use crate::resistance::ResultSet;

/// Label language for reports, tables, and plot annotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// English labels.
    #[default]
    English,
    /// Portuguese labels.
    Portuguese,
}

/// Parse failure for a locale selector string.
#[derive(Debug, Error)]
#[error("unknown locale {0:?}; expected \"english\" or \"portuguese\"")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" | "e" => Ok(Locale::English),
            "portuguese" | "pt" | "p" => Ok(Locale::Portuguese),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl Locale {
    /// The label set for this locale.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }
}

/// Static label set for one locale.
#[derive(Clone, Copy, Debug)]
pub struct Labels {
    pub hull_header: &'static str,
    pub length: &'static str,
    pub beam: &'static str,
    pub draft: &'static str,
    pub block_coefficient: &'static str,
    pub midship_coefficient: &'static str,
    pub lcb: &'static str,
    pub displaced_volume: &'static str,
    pub wetted_surface: &'static str,
    pub propeller_area: &'static str,

    pub results_header: &'static str,
    pub col_speed_knots: &'static str,
    pub col_speed_mps: &'static str,
    pub col_froude: &'static str,
    pub col_resistance: &'static str,
    pub col_power: &'static str,

    pub plot_title: &'static str,
    pub axis_speed_knots: &'static str,
    pub axis_resistance_kn: &'static str,
    pub axis_power_kw: &'static str,
    pub axis_froude: &'static str,
    pub series_total: &'static str,
    pub series_friction: &'static str,
    pub series_residual: &'static str,
    pub froude_chart_title: &'static str,
    pub power_chart_title: &'static str,

    pub recommendation_header: &'static str,
    pub recommended_max_speed: &'static str,
    pub suggested_min_speed: &'static str,
    pub max_froude: &'static str,
    pub knots_unit: &'static str,

    pub stats_header: &'static str,
    pub max_resistance: &'static str,
    pub max_power: &'static str,
    pub froude_range: &'static str,
    pub at_word: &'static str,
}

static ENGLISH: Labels = Labels {
    hull_header: "HULL PARAMETERS:",
    length: "Length (LWL)",
    beam: "Beam (B)",
    draft: "Draft (T)",
    block_coefficient: "Block Coefficient (CB)",
    midship_coefficient: "Midship Coefficient (CM)",
    lcb: "Longitudinal Center (LCB)",
    displaced_volume: "Displacement Volume",
    wetted_surface: "Wetted Surface Area",
    propeller_area: "Propeller Area",

    results_header: "ANALYSIS RESULTS",
    col_speed_knots: "Speed (kts)",
    col_speed_mps: "Speed (m/s)",
    col_froude: "Froude",
    col_resistance: "Resist (kN)",
    col_power: "Power (kW)",

    plot_title: "Hull Resistance Analysis",
    axis_speed_knots: "Speed (knots)",
    axis_resistance_kn: "Resistance (kN)",
    axis_power_kw: "Effective Power (kW)",
    axis_froude: "Froude Number",
    series_total: "Total Resistance",
    series_friction: "Frictional Resistance",
    series_residual: "Residual Resistance",
    froude_chart_title: "Resistance vs Froude Number",
    power_chart_title: "Effective Power",

    recommendation_header: "Recommendation for this hull",
    recommended_max_speed: "Recommended maximum speed",
    suggested_min_speed: "Suggested minimum speed",
    max_froude: "Maximum Froude number",
    knots_unit: "knots",

    stats_header: "STATISTICS",
    max_resistance: "Maximum resistance",
    max_power: "Maximum power",
    froude_range: "Froude range",
    at_word: "at",
};

static PORTUGUESE: Labels = Labels {
    hull_header: "PARÂMETROS DO CASCO:",
    length: "Comprimento (LWL)",
    beam: "Boca (B)",
    draft: "Calado (T)",
    block_coefficient: "Coef. Bloco (CB)",
    midship_coefficient: "Coef. Seção Mestra (CM)",
    lcb: "Centro de Carena (LCB)",
    displaced_volume: "Volume Deslocamento",
    wetted_surface: "Área Molhada",
    propeller_area: "Área do Hélice",

    results_header: "RESULTADOS DA ANÁLISE",
    col_speed_knots: "Veloc (nós)",
    col_speed_mps: "Veloc (m/s)",
    col_froude: "Froude",
    col_resistance: "Resist (kN)",
    col_power: "Potência (kW)",

    plot_title: "Análise de Resistência do Casco",
    axis_speed_knots: "Velocidade (nós)",
    axis_resistance_kn: "Resistência (kN)",
    axis_power_kw: "Potência Efetiva (kW)",
    axis_froude: "Número de Froude",
    series_total: "Resistência Total",
    series_friction: "Resistência de Atrito",
    series_residual: "Resistência Residual",
    froude_chart_title: "Resistência vs Número de Froude",
    power_chart_title: "Potência Efetiva",

    recommendation_header: "Recomendação para este casco",
    recommended_max_speed: "Velocidade máxima recomendada",
    suggested_min_speed: "Velocidade mínima sugerida",
    max_froude: "Número de Froude máximo",
    knots_unit: "nós",

    stats_header: "ESTATÍSTICAS",
    max_resistance: "Resistência máxima",
    max_power: "Potência máxima",
    froude_range: "Faixa de Froude",
    at_word: "a",
};

/// Maximum number of rows rendered by [`results_table`].
const TABLE_ROW_LIMIT: usize = 10;

/// Fixed-width table of at most the first ten samples of a curve.
///
/// Purely presentational; the locale selects the column labels only.
pub fn results_table(results: &ResultSet, locale: Locale) -> String {
    let labels = locale.labels();

    let mut out = String::new();
    out.push_str(&format!("{:=^80}\n", format!(" {} ", labels.results_header)));
    out.push_str(&format!(
        "{:>11} {:>11} {:>8} {:>12} {:>15}\n",
        labels.col_speed_knots,
        labels.col_speed_mps,
        labels.col_froude,
        labels.col_resistance,
        labels.col_power,
    ));
    out.push_str(&format!("{}\n", "-".repeat(80)));

    for i in 0..results.len().min(TABLE_ROW_LIMIT) {
        out.push_str(&format!(
            "{:>11.1} {:>11.2} {:>8.3} {:>12.1} {:>15.1}\n",
            results.speed_knots[i],
            results.speed_mps[i],
            results.froude[i],
            results.total_kn[i],
            results.power_kw[i],
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullGeometry;
    use crate::resistance::ResistanceEngine;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("portuguese".parse::<Locale>().unwrap(), Locale::Portuguese);
        assert_eq!("p".parse::<Locale>().unwrap(), Locale::Portuguese);
        assert!("klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn test_label_sets_differ() {
        assert_ne!(
            Locale::English.labels().results_header,
            Locale::Portuguese.labels().results_header
        );
    }

    #[test]
    fn test_results_table_caps_at_ten_rows() {
        let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
        let mut engine = ResistanceEngine::new(&hull);
        let speeds: Vec<f64> = (1..=25).map(|i| i as f64 * 0.5).collect();
        engine.compute_holtrop(&speeds).unwrap();

        let table = engine.summary_table(Locale::English).unwrap();
        // header + column row + rule + 10 data rows
        assert_eq!(table.lines().count(), 13);
        assert!(table.contains("ANALYSIS RESULTS"));
        assert!(table.contains("Speed (kts)"));
    }

    #[test]
    fn test_results_table_localized_labels_same_numbers() {
        let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
        let mut engine = ResistanceEngine::new(&hull);
        engine.compute_simple(&[7.5]).unwrap();

        let english = engine.summary_table(Locale::English).unwrap();
        let portuguese = engine.summary_table(Locale::Portuguese).unwrap();

        assert!(english.contains("ANALYSIS RESULTS"));
        assert!(portuguese.contains("RESULTADOS DA ANÁLISE"));

        // Last line (the data row) must be identical in both languages
        let en_row = english.lines().last().unwrap();
        let pt_row = portuguese.lines().last().unwrap();
        assert_eq!(en_row, pt_row);
    }
}
