//! Chart series - sampled data per formula variant

use crate::formula::ArmourFormula;
use serde::{Deserialize, Serialize};

/// Which quantity a chart series samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartDataType {
    /// Damage reduction as a percentage
    Reduction,
    /// Damage actually taken
    TotalDamage,
}

/// One sample of a derived series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub armour: f64,
    pub value: f64,
}

/// A named series of chart points, ordered by the input armour list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesData {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// Sample a formula over the given armour values
///
/// One point per input value, in input order. The input is neither sorted
/// nor deduplicated here; callers own its shape.
pub fn generate_series_data(
    formula: &ArmourFormula,
    damage_input: f64,
    armour_values: &[f64],
    data_type: ChartDataType,
) -> SeriesData {
    let points = armour_values
        .iter()
        .map(|&armour| {
            let value = match data_type {
                ChartDataType::Reduction => formula.reduction_percent(armour, damage_input),
                ChartDataType::TotalDamage => formula.total_damage(armour, damage_input),
            };
            ChartPoint { armour, value }
        })
        .collect();

    SeriesData {
        name: formula.name.to_string(),
        points,
    }
}
