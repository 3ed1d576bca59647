use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retirement_planner_core::retirement::RetirementPlanInput;
use retirement_planner_core::scenarios::sensitivity::{self, PlanMetric, SensitivityInput};
use retirement_planner_core::SensitivityVariable;

use crate::input;

/// Arguments for sensitivity analysis
#[derive(Args)]
pub struct SensitivityArgs {
    /// Path to JSON or YAML file with the base plan inputs
    #[arg(long)]
    pub input: Option<String>,

    /// First sensitivity variable in format name:min:max:step
    /// (e.g. "expected_return_rate_pct:4:10:1")
    #[arg(long)]
    pub var1: String,

    /// Second sensitivity variable (optional, creates a 2D table)
    #[arg(long)]
    pub var2: Option<String>,

    /// Plan metric to report: total_retirement_savings, safe_annual_withdrawal,
    /// annual_surplus_or_shortfall, annual_income_from_savings,
    /// savings_depletion_years
    #[arg(long, default_value = "annual_surplus_or_shortfall")]
    pub metric: String,
}

fn parse_sens_var(spec: &str) -> Result<SensitivityVariable, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        return Err(format!(
            "Sensitivity variable must be name:min:max:step, got '{}'",
            spec
        )
        .into());
    }
    Ok(SensitivityVariable {
        name: parts[0].to_string(),
        min: parts[1].parse::<Decimal>()?,
        max: parts[2].parse::<Decimal>()?,
        step: parts[3].parse::<Decimal>()?,
    })
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let base_inputs: RetirementPlanInput =
        input::read_input(args.input.as_deref(), "sensitivity analysis")?;

    let sens_input = SensitivityInput {
        base_inputs,
        variable_1: parse_sens_var(&args.var1)?,
        variable_2: args.var2.as_deref().map(parse_sens_var).transpose()?,
        output_metric: args.metric.parse::<PlanMetric>()?,
    };

    let result = sensitivity::evaluate_sensitivity(&sens_input)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sens_var() {
        let var = parse_sens_var("inflation_rate_pct:1:4:0.5").unwrap();
        assert_eq!(var.name, "inflation_rate_pct");
        assert_eq!(var.min, Decimal::ONE);
        assert_eq!(var.max, Decimal::from(4));
        assert_eq!(var.step, Decimal::new(5, 1));
    }

    #[test]
    fn test_parse_sens_var_rejects_short_spec() {
        assert!(parse_sens_var("inflation_rate_pct:1:4").is_err());
        assert!(parse_sens_var("inflation_rate_pct:a:4:1").is_err());
    }
}
