//! Static catalog of goal-type presets.

use serde::Serialize;

/// A goal template with suggested horizon and return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTypePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub default_horizon_years: f64,
    /// Decimal fraction
    pub default_return_rate: f64,
    pub requires_custom_params: bool,
}

pub const GOAL_TYPE_PRESETS: &[GoalTypePreset] = &[
    GoalTypePreset {
        id: "retirement",
        name: "Retirement",
        default_horizon_years: 25.0,
        default_return_rate: 0.10,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "child-education",
        name: "Child Education",
        default_horizon_years: 15.0,
        default_return_rate: 0.10,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "house-purchase",
        name: "House Purchase",
        default_horizon_years: 10.0,
        default_return_rate: 0.09,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "car-purchase",
        name: "Car Purchase",
        default_horizon_years: 5.0,
        default_return_rate: 0.08,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "emergency-fund",
        name: "Emergency Fund",
        default_horizon_years: 1.0,
        default_return_rate: 0.06,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "vacation",
        name: "Vacation",
        default_horizon_years: 2.0,
        default_return_rate: 0.07,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "wedding",
        name: "Wedding",
        default_horizon_years: 5.0,
        default_return_rate: 0.08,
        requires_custom_params: false,
    },
    GoalTypePreset {
        id: "custom",
        name: "Custom Goal",
        default_horizon_years: 10.0,
        default_return_rate: 0.08,
        requires_custom_params: true,
    },
];

pub fn find_goal_type(id: &str) -> Option<&'static GoalTypePreset> {
    GOAL_TYPE_PRESETS
        .iter()
        .find(|preset| preset.id.eq_ignore_ascii_case(id))
}
