use clap::Args;
use serde_json::Value;

use retirement_planner_core::retirement::{self, RetirementPlanInput};

use crate::input;

/// Arguments for a full retirement plan
#[derive(Args)]
pub struct PlanArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the year-by-year projection
#[derive(Args)]
pub struct ProjectionArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_plan(args: PlanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: RetirementPlanInput =
        input::read_input(args.input.as_deref(), "retirement planning")?;
    let result = retirement::plan_retirement(&plan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_projection(args: ProjectionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: RetirementPlanInput =
        input::read_input(args.input.as_deref(), "the savings projection")?;
    let result = retirement::plan_retirement(&plan_input)?;
    Ok(serde_json::to_value(result.result.projection)?)
}
