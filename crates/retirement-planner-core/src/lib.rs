//! Retirement savings projection: accumulation to retirement, the 4% safe
//! withdrawal, depletion horizon, and shortfall remediation.

pub mod error;
pub mod retirement;
pub mod time_value;
pub mod types;

#[cfg(feature = "sensitivity")]
pub mod scenarios;

pub use error::RetirementPlanError;
pub use types::*;

/// Standard result type for all retirement-planner operations
pub type PlanResult<T> = Result<T, RetirementPlanError>;
