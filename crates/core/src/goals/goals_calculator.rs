//! Contribution solver.
//!
//! Given a goal's target, existing savings, horizon and expected return, works
//! out the monthly contribution (future value of an annuity, solved for the
//! payment) and the lump sum (present value of the shortfall) that close the
//! gap left after existing savings have compounded.
//!
//! `solve` is total: bad horizons or rates come back as a flagged result,
//! never as an `Err` or a panic. There is no clamping of large exponents;
//! if `(1 + r)^n` overflows, the IEEE infinities and NaNs propagate into the
//! result as-is.

use serde::{Deserialize, Serialize};

use super::goals_model::InvestmentFrequency;
use crate::constants::{
    GOAL_ALREADY_MET_MESSAGE, INVALID_HORIZON_OR_RATE_MESSAGE, MONTHS_PER_YEAR,
};
use crate::utils::number_utils::round_currency;

/// Parameters the solver reads from a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverInput {
    pub target_amount: f64,
    pub current_savings: f64,
    pub time_horizon_years: f64,
    /// Annual rate as a decimal fraction, never a percentage
    pub annual_rate: f64,
    pub frequency: InvestmentFrequency,
}

/// The single input defect the solver reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationError {
    /// Horizon is zero or negative, or the rate is negative.
    InvalidHorizonOrRate,
}

/// Output of the solver. Currency fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_investment: f64,
    pub one_time_investment: f64,
    pub future_value_current: f64,
    pub remaining_needed: f64,
    pub total_monthly_investments: f64,
    /// Set only when existing savings alone reach the target.
    #[serde(default)]
    pub goal_met: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CalculationError>,
}

impl CalculationResult {
    fn invalid_horizon_or_rate() -> Self {
        Self {
            message: Some(INVALID_HORIZON_OR_RATE_MESSAGE.to_string()),
            error: Some(CalculationError::InvalidHorizonOrRate),
            ..Self::default()
        }
    }

    fn goal_already_met(future_value_current: f64) -> Self {
        Self {
            future_value_current: round_currency(future_value_current),
            goal_met: true,
            message: Some(GOAL_ALREADY_MET_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when existing savings alone reach the target. A shortfall that
    /// rounds to zero cents still counts as unmet.
    pub fn is_goal_met(&self) -> bool {
        self.goal_met
    }

    /// The figure the caller treats as primary for `frequency`. The other
    /// one stays available as an informational alternative.
    pub fn primary_investment(&self, frequency: InvestmentFrequency) -> f64 {
        match frequency {
            InvestmentFrequency::Monthly => self.monthly_investment,
            InvestmentFrequency::OneTime => self.one_time_investment,
        }
    }
}

/// `n * ln(1 + rate)`, accurate for rates too small to survive `1.0 + rate`.
fn log_growth(rate: f64, periods: f64) -> f64 {
    periods * rate.ln_1p()
}

/// Growth factor `(1 + rate)^periods`. `periods` may be fractional.
fn growth_factor(rate: f64, periods: f64) -> f64 {
    log_growth(rate, periods).exp()
}

/// Payment that grows to `future_value` over `periods` at `rate` per period.
///
/// Inverts `FV = PMT * ((1 + r)^n - 1) / r`. When `(1 + r)^n - 1` is zero,
/// either because the rate is zero or because it underflows, this falls
/// back to straight-line division.
pub fn annuity_payment(future_value: f64, rate: f64, periods: f64) -> f64 {
    let accumulated = log_growth(rate, periods).exp_m1();
    if rate == 0.0 || accumulated == 0.0 {
        return future_value / periods;
    }
    future_value * rate / accumulated
}

/// Computes the contributions needed to reach the goal described by `input`.
pub fn solve(input: &SolverInput) -> CalculationResult {
    let years = input.time_horizon_years;
    let annual_rate = input.annual_rate;

    if years.is_nan() || annual_rate.is_nan() || years <= 0.0 || annual_rate < 0.0 {
        return CalculationResult::invalid_horizon_or_rate();
    }

    let annual_growth = growth_factor(annual_rate, years);
    let future_value_current = input.current_savings * annual_growth;
    let remaining_needed = input.target_amount - future_value_current;

    if remaining_needed <= 0.0 {
        return CalculationResult::goal_already_met(future_value_current);
    }

    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    let num_months = years * MONTHS_PER_YEAR;

    let monthly_investment = annuity_payment(remaining_needed, monthly_rate, num_months);
    let one_time_investment = remaining_needed / annual_growth;

    CalculationResult {
        monthly_investment: round_currency(monthly_investment),
        one_time_investment: round_currency(one_time_investment),
        future_value_current: round_currency(future_value_current),
        remaining_needed: round_currency(remaining_needed),
        total_monthly_investments: round_currency(monthly_investment * num_months),
        goal_met: false,
        message: None,
        error: None,
    }
}
