pub mod projector;
pub mod remediation;

pub use projector::{
    compute, plan_retirement, validate, Phase, ProjectionYear, RetirementIncome,
    RetirementPlanInput, RetirementPlanResult, MAX_AGE, MAX_AMOUNT, MAX_INCOME_NEEDED_PCT,
    MAX_RATE_PCT, SAFE_WITHDRAWAL_RATE,
};
pub use remediation::{RecommendedChanges, MAX_EXTRA_WORKING_YEARS};
