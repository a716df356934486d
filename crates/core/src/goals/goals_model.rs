//! Goals domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::goal_types::find_goal_type;
use super::goals_calculator::{solve, CalculationResult, SolverInput};
use crate::errors::{Result, ValidationError};
use crate::utils::number_utils::{ensure_finite, ensure_non_negative};
use crate::utils::serde_utils::deserialize_patch;

/// Which schedule the user prefers as the primary figure.
///
/// The solver always computes both figures; this only decides which one
/// is presented first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentFrequency {
    #[default]
    Monthly,
    OneTime,
}

impl InvestmentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentFrequency::Monthly => "monthly",
            InvestmentFrequency::OneTime => "one_time",
        }
    }
}

/// Loan financing attached to a goal (e.g. a house or car purchase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOptions {
    pub loan_amount: f64,
    /// Annual interest rate as a decimal fraction
    pub interest_rate: f64,
    pub tenure_years: f64,
}

/// Optional extras carried by richer goal types.
///
/// The five solver inputs are always present on [`GoalParameters`]; these
/// are informational and never feed the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_options: Option<LoanOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_params: Option<BTreeMap<String, f64>>,
}

impl GoalDetails {
    fn validate(&self) -> Result<()> {
        if let Some(sip) = self.sip_amount {
            ensure_non_negative("sipAmount", sip)?;
        }
        if let Some(loan) = &self.loan_options {
            ensure_non_negative("loanOptions.loanAmount", loan.loan_amount)?;
            ensure_non_negative("loanOptions.interestRate", loan.interest_rate)?;
            ensure_non_negative("loanOptions.tenureYears", loan.tenure_years)?;
        }
        if let Some(params) = &self.custom_params {
            for value in params.values() {
                ensure_finite("customParams", *value)?;
            }
        }
        Ok(())
    }

    fn has_custom_params(&self) -> bool {
        self.custom_params
            .as_ref()
            .map(|params| !params.is_empty())
            .unwrap_or(false)
    }
}

/// The user-editable part of a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalParameters {
    pub name: String,
    pub goal_type: Option<String>,
    pub target_amount: f64,
    pub current_savings: f64,
    pub time_horizon_years: f64,
    /// Annualized nominal rate as a decimal fraction (0.08 for 8%)
    pub expected_return_rate: f64,
    pub investment_frequency: InvestmentFrequency,
    #[serde(default)]
    pub details: GoalDetails,
}

impl GoalParameters {
    /// Checks store-level constraints.
    ///
    /// Horizon and rate only need to be finite here: a non-positive horizon
    /// or negative rate is reported by the solver in `calculations`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        ensure_non_negative("targetAmount", self.target_amount)?;
        ensure_non_negative("currentSavings", self.current_savings)?;
        ensure_finite("timeHorizonYears", self.time_horizon_years)?;
        ensure_finite("expectedReturnRate", self.expected_return_rate)?;
        self.details.validate()?;

        if let Some(goal_type) = &self.goal_type {
            let preset = find_goal_type(goal_type)
                .ok_or_else(|| ValidationError::UnknownGoalType(goal_type.clone()))?;
            if preset.requires_custom_params && !self.details.has_custom_params() {
                return Err(ValidationError::MissingField("customParams".to_string()).into());
            }
        }
        Ok(())
    }

    pub fn solver_input(&self) -> SolverInput {
        SolverInput {
            target_amount: self.target_amount,
            current_savings: self.current_savings,
            time_horizon_years: self.time_horizon_years,
            annual_rate: self.expected_return_rate,
            frequency: self.investment_frequency,
        }
    }
}

/// Domain model representing a goal.
///
/// `calculations` is private: it can only be produced by running the solver
/// over the goal's current parameters, so it never goes stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    #[serde(flatten)]
    parameters: GoalParameters,
    calculations: CalculationResult,
}

impl Goal {
    pub fn new(id: i64, parameters: GoalParameters) -> Self {
        let calculations = solve(&parameters.solver_input());
        Self {
            id,
            parameters,
            calculations,
        }
    }

    pub fn parameters(&self) -> &GoalParameters {
        &self.parameters
    }

    pub fn calculations(&self) -> &CalculationResult {
        &self.calculations
    }

    /// Replaces the parameters and re-runs the solver.
    pub fn set_parameters(&mut self, parameters: GoalParameters) {
        self.calculations = solve(&parameters.solver_input());
        self.parameters = parameters;
    }

    /// The figure matching the goal's preferred investment frequency.
    pub fn primary_investment(&self) -> f64 {
        self.calculations
            .primary_investment(self.parameters.investment_frequency)
    }
}

/// Input model for creating a new goal.
///
/// Horizon and rate may be omitted when `goal_type` names a preset; the
/// preset defaults fill them in. Without a preset they default to zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub goal_type: Option<String>,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_savings: f64,
    pub time_horizon_years: Option<f64>,
    /// Decimal fraction
    pub expected_return_rate: Option<f64>,
    #[serde(default)]
    pub investment_frequency: InvestmentFrequency,
    #[serde(default)]
    pub details: GoalDetails,
}

impl NewGoal {
    /// Resolves preset defaults and validates the result.
    pub fn into_parameters(self) -> Result<GoalParameters> {
        let preset = match &self.goal_type {
            Some(goal_type) => Some(
                find_goal_type(goal_type)
                    .ok_or_else(|| ValidationError::UnknownGoalType(goal_type.clone()))?,
            ),
            None => None,
        };

        let time_horizon_years = self
            .time_horizon_years
            .or(preset.map(|p| p.default_horizon_years))
            .unwrap_or(0.0);
        let expected_return_rate = self
            .expected_return_rate
            .or(preset.map(|p| p.default_return_rate))
            .unwrap_or(0.0);

        let parameters = GoalParameters {
            name: self.name.trim().to_string(),
            goal_type: preset.map(|p| p.id.to_string()),
            target_amount: self.target_amount,
            current_savings: self.current_savings,
            time_horizon_years,
            expected_return_rate,
            investment_frequency: self.investment_frequency,
            details: self.details,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

/// Maps a goal type to its preset id, leaving unknown names for validation to reject.
fn canonical_goal_type(goal_type: &str) -> String {
    find_goal_type(goal_type)
        .map(|preset| preset.id.to_string())
        .unwrap_or_else(|| goal_type.to_string())
}

/// Partial update of a goal's parameters. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    /// `Some(None)` detaches the goal from its preset
    #[serde(
        default,
        deserialize_with = "deserialize_patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal_type: Option<Option<String>>,
    pub target_amount: Option<f64>,
    pub current_savings: Option<f64>,
    pub time_horizon_years: Option<f64>,
    /// Decimal fraction
    pub expected_return_rate: Option<f64>,
    pub investment_frequency: Option<InvestmentFrequency>,
    pub details: Option<GoalDetails>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        *self == GoalUpdate::default()
    }

    /// Applies the changes on top of `current` and validates the outcome.
    pub fn apply(self, current: GoalParameters) -> Result<GoalParameters> {
        let next = GoalParameters {
            name: self
                .name
                .map(|name| name.trim().to_string())
                .unwrap_or(current.name),
            goal_type: match self.goal_type {
                Some(goal_type) => goal_type.map(|goal_type| canonical_goal_type(&goal_type)),
                None => current.goal_type,
            },
            target_amount: self.target_amount.unwrap_or(current.target_amount),
            current_savings: self.current_savings.unwrap_or(current.current_savings),
            time_horizon_years: self
                .time_horizon_years
                .unwrap_or(current.time_horizon_years),
            expected_return_rate: self
                .expected_return_rate
                .unwrap_or(current.expected_return_rate),
            investment_frequency: self
                .investment_frequency
                .unwrap_or(current.investment_frequency),
            details: self.details.unwrap_or(current.details),
        };
        next.validate()?;
        Ok(next)
    }
}
