/// Number of compounding periods per year for the monthly schedule
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Decimal places kept for currency figures at the output boundary
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Message attached to a calculation whose goal is covered by existing savings
pub const GOAL_ALREADY_MET_MESSAGE: &str = "Current savings will exceed your goal!";

/// Message attached to a calculation rejected for its horizon or rate
pub const INVALID_HORIZON_OR_RATE_MESSAGE: &str = "Invalid time horizon or return rate";
