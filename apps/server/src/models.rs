//! Request and response shapes for the HTTP API.
//!
//! Rates travel over the wire as percentages (8 for 8%) on requests and in
//! the goal-type catalog; the core always works in decimal fractions, so the
//! conversion happens here.

use std::collections::BTreeMap;

use goalplan_core::assets as core_assets;
use goalplan_core::goals as core_goals;
use goalplan_core::utils::number_utils::round_to_places;
use goalplan_core::utils::serde_utils::deserialize_patch;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Trims binary noise such as `0.07 * 100 = 7.000000000000001`.
pub fn fraction_to_percent(fraction: f64) -> f64 {
    round_to_places(fraction * 100.0, 6)
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoanOptionsRequest {
    pub loan_amount: f64,
    /// Percent
    pub interest_rate: f64,
    pub tenure_years: f64,
}

impl From<LoanOptionsRequest> for core_goals::LoanOptions {
    fn from(l: LoanOptionsRequest) -> Self {
        Self {
            loan_amount: l.loan_amount,
            interest_rate: percent_to_fraction(l.interest_rate),
            tenure_years: l.tenure_years,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetailsRequest {
    pub sip_amount: Option<f64>,
    pub loan_options: Option<LoanOptionsRequest>,
    #[schema(value_type = Object)]
    pub custom_params: Option<BTreeMap<String, f64>>,
}

impl From<GoalDetailsRequest> for core_goals::GoalDetails {
    fn from(d: GoalDetailsRequest) -> Self {
        Self {
            sip_amount: d.sip_amount,
            loan_options: d.loan_options.map(Into::into),
            custom_params: d.custom_params,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub goal_type: Option<String>,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_savings: f64,
    pub time_horizon_years: Option<f64>,
    /// Percent; falls back to the goal type's default when omitted
    pub expected_return_rate: Option<f64>,
    #[serde(default)]
    #[schema(value_type = String, example = "monthly")]
    pub investment_frequency: core_goals::InvestmentFrequency,
    #[serde(default)]
    pub details: GoalDetailsRequest,
}

impl From<NewGoal> for core_goals::NewGoal {
    fn from(g: NewGoal) -> Self {
        Self {
            name: g.name,
            goal_type: g.goal_type,
            target_amount: g.target_amount,
            current_savings: g.current_savings,
            time_horizon_years: g.time_horizon_years,
            expected_return_rate: g.expected_return_rate.map(percent_to_fraction),
            investment_frequency: g.investment_frequency,
            details: g.details.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    /// `null` detaches the goal from its preset
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub goal_type: Option<Option<String>>,
    pub target_amount: Option<f64>,
    pub current_savings: Option<f64>,
    pub time_horizon_years: Option<f64>,
    /// Percent
    pub expected_return_rate: Option<f64>,
    #[schema(value_type = Option<String>, example = "one_time")]
    pub investment_frequency: Option<core_goals::InvestmentFrequency>,
    pub details: Option<GoalDetailsRequest>,
}

impl From<GoalUpdate> for core_goals::GoalUpdate {
    fn from(u: GoalUpdate) -> Self {
        Self {
            name: u.name,
            goal_type: u.goal_type,
            target_amount: u.target_amount,
            current_savings: u.current_savings,
            time_horizon_years: u.time_horizon_years,
            expected_return_rate: u.expected_return_rate.map(percent_to_fraction),
            investment_frequency: u.investment_frequency,
            details: u.details.map(Into::into),
        }
    }
}

/// Ad-hoc solver input that is not stored as a goal.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub target_amount: f64,
    #[serde(default)]
    pub current_savings: f64,
    pub time_horizon_years: f64,
    /// Percent
    pub expected_return_rate: f64,
    #[serde(default)]
    #[schema(value_type = String, example = "monthly")]
    pub investment_frequency: core_goals::InvestmentFrequency,
}

impl From<CalculationRequest> for core_goals::SolverInput {
    fn from(c: CalculationRequest) -> Self {
        Self {
            target_amount: c.target_amount,
            current_savings: c.current_savings,
            time_horizon_years: c.time_horizon_years,
            annual_rate: percent_to_fraction(c.expected_return_rate),
            frequency: c.investment_frequency,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalType {
    pub id: String,
    pub name: String,
    pub default_horizon_years: f64,
    /// Percent
    pub default_return_rate: f64,
    pub requires_custom_params: bool,
}

impl From<&core_goals::GoalTypePreset> for GoalType {
    fn from(p: &core_goals::GoalTypePreset) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.to_string(),
            default_horizon_years: p.default_horizon_years,
            default_return_rate: fraction_to_percent(p.default_return_rate),
            requires_custom_params: p.requires_custom_params,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = String, example = "equity")]
    pub asset_class: core_assets::AssetClass,
    #[serde(default)]
    pub current_value: f64,
    /// Percent
    pub expected_return_rate: Option<f64>,
}

impl From<NewAsset> for core_assets::NewAsset {
    fn from(a: NewAsset) -> Self {
        Self {
            name: a.name,
            asset_class: a.asset_class,
            current_value: a.current_value,
            expected_return_rate: a.expected_return_rate.map(percent_to_fraction),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: Option<String>,
    #[schema(value_type = Option<String>, example = "gold")]
    pub asset_class: Option<core_assets::AssetClass>,
    pub current_value: Option<f64>,
    /// Percent; `null` clears the rate
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<f64>)]
    pub expected_return_rate: Option<Option<f64>>,
}

impl From<AssetUpdate> for core_assets::AssetUpdate {
    fn from(a: AssetUpdate) -> Self {
        Self {
            name: a.name,
            asset_class: a.asset_class,
            current_value: a.current_value,
            expected_return_rate: a
                .expected_return_rate
                .map(|rate| rate.map(percent_to_fraction)),
        }
    }
}
