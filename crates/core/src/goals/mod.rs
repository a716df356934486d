//! Goals module - domain models, the contribution solver, services, and traits.

pub mod goal_types;
pub mod goals_calculator;
mod goals_model;
mod goals_service;
mod goals_traits;


#[cfg(test)]
mod goals_service_tests;

pub use goal_types::{find_goal_type, GoalTypePreset, GOAL_TYPE_PRESETS};
pub use goals_calculator::{annuity_payment, solve, CalculationError, CalculationResult, SolverInput};
pub use goals_model::{
    Goal, GoalDetails, GoalParameters, GoalUpdate, InvestmentFrequency, LoanOptions, NewGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalMutation, GoalRepositoryTrait, GoalServiceTrait};
