use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RetirementPlanError;
use crate::retirement::projector::{compute, validate, RetirementPlanInput, RetirementPlanResult};
use crate::types::*;
use crate::PlanResult;

/// Largest number of values a single variable may sweep through.
pub const MAX_SWEEP_POINTS: usize = 1_000;

/// Plan output tracked across a sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMetric {
    TotalRetirementSavings,
    SafeAnnualWithdrawal,
    AnnualSurplusOrShortfall,
    AnnualIncomeFromSavings,
    SavingsDepletionYears,
}

impl PlanMetric {
    /// Read the metric off a result. Depletion years is `None` when savings
    /// never run out.
    pub fn extract(self, result: &RetirementPlanResult) -> Option<Decimal> {
        match self {
            PlanMetric::TotalRetirementSavings => Some(result.total_retirement_savings),
            PlanMetric::SafeAnnualWithdrawal => Some(result.safe_annual_withdrawal),
            PlanMetric::AnnualSurplusOrShortfall => Some(result.annual_surplus_or_shortfall),
            PlanMetric::AnnualIncomeFromSavings => Some(result.annual_income_from_savings),
            PlanMetric::SavingsDepletionYears => result.savings_depletion_years,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanMetric::TotalRetirementSavings => "total_retirement_savings",
            PlanMetric::SafeAnnualWithdrawal => "safe_annual_withdrawal",
            PlanMetric::AnnualSurplusOrShortfall => "annual_surplus_or_shortfall",
            PlanMetric::AnnualIncomeFromSavings => "annual_income_from_savings",
            PlanMetric::SavingsDepletionYears => "savings_depletion_years",
        }
    }
}

impl std::str::FromStr for PlanMetric {
    type Err = RetirementPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metrics = [
            PlanMetric::TotalRetirementSavings,
            PlanMetric::SafeAnnualWithdrawal,
            PlanMetric::AnnualSurplusOrShortfall,
            PlanMetric::AnnualIncomeFromSavings,
            PlanMetric::SavingsDepletionYears,
        ];
        metrics
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RetirementPlanError::InvalidPlanInput {
                field: "output_metric".into(),
                reason: format!("Unknown metric '{s}'"),
            })
    }
}

/// Input for 1- or 2-way sensitivity analysis over a retirement plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityInput {
    pub base_inputs: RetirementPlanInput,
    pub variable_1: SensitivityVariable,
    #[serde(default)]
    pub variable_2: Option<SensitivityVariable>,
    pub output_metric: PlanMetric,
}

/// Output of sensitivity analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityOutput {
    pub variable_1_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_2_name: Option<String>,
    pub variable_1_values: Vec<Decimal>,
    pub variable_2_values: Vec<Decimal>,
    pub output_metric: PlanMetric,
    /// Matrix[i][j] = metric when variable_1 = variable_1_values[i] and
    /// variable_2 = variable_2_values[j]. One column when only variable_1
    /// is swept. `None` where the grid point is not a valid plan (or the
    /// metric is undefined there).
    pub matrix: Vec<Vec<Option<Decimal>>>,
    pub base_case_value: Option<Decimal>,
}

/// Generate the sweep values for a sensitivity variable from min to max with step.
fn generate_sweep_values(var: &SensitivityVariable) -> PlanResult<Vec<Decimal>> {
    if var.step <= Decimal::ZERO {
        return Err(RetirementPlanError::InvalidPlanInput {
            field: format!("variable:{}", var.name),
            reason: "Step must be positive".into(),
        });
    }
    if var.min > var.max {
        return Err(RetirementPlanError::InvalidPlanInput {
            field: format!("variable:{}", var.name),
            reason: "Min must be <= max".into(),
        });
    }

    let mut values = Vec::new();
    let mut current = var.min;
    while current <= var.max {
        if values.len() >= MAX_SWEEP_POINTS {
            return Err(RetirementPlanError::InvalidPlanInput {
                field: format!("variable:{}", var.name),
                reason: format!("Sweep exceeds {MAX_SWEEP_POINTS} points"),
            });
        }
        values.push(current);
        current += var.step;
    }
    // Ensure max is included if step doesn't land exactly on it
    if let Some(&last) = values.last() {
        if last < var.max {
            values.push(var.max);
        }
    }

    Ok(values)
}

fn age_value(name: &str, value: Decimal) -> PlanResult<u32> {
    if !value.fract().is_zero() {
        return Err(RetirementPlanError::InvalidPlanInput {
            field: format!("variable:{name}"),
            reason: format!("Ages must be whole years, got {value}"),
        });
    }
    value.to_u32().ok_or_else(|| RetirementPlanError::InvalidPlanInput {
        field: format!("variable:{name}"),
        reason: format!("Age out of range: {value}"),
    })
}

/// Copy of `base` with the named numeric field replaced.
pub fn apply_variable(
    base: &RetirementPlanInput,
    name: &str,
    value: Decimal,
) -> PlanResult<RetirementPlanInput> {
    let mut input = base.clone();
    match name {
        "current_age" => input.current_age = age_value(name, value)?,
        "retirement_age" => input.retirement_age = age_value(name, value)?,
        "life_expectancy" => input.life_expectancy = age_value(name, value)?,
        "current_savings" => input.current_savings = value,
        "current_income" => input.current_income = value,
        "annual_contribution" => input.annual_contribution = value,
        "social_security_annual" => input.social_security_annual = value,
        "other_income_annual" => input.other_income_annual = value,
        "expected_return_rate_pct" => input.expected_return_rate_pct = value,
        "inflation_rate_pct" => input.inflation_rate_pct = value,
        "income_needed_pct" => input.income_needed_pct = value,
        other => {
            return Err(RetirementPlanError::InvalidPlanInput {
                field: format!("variable:{other}"),
                reason: "Not a numeric retirement plan field".into(),
            })
        }
    }
    Ok(input)
}

/// Evaluate `output_metric` at every point of the sweep grid.
///
/// The base inputs and variable names must be valid. Grid points that fail
/// validation, or that put a fractional or negative value on an age, are
/// recorded as `None` with a warning.
pub fn evaluate_sensitivity(
    input: &SensitivityInput,
) -> PlanResult<ComputationOutput<SensitivityOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(&input.base_inputs)?;

    let v1_values = generate_sweep_values(&input.variable_1)?;
    let v2_values = match &input.variable_2 {
        Some(var) => generate_sweep_values(var)?,
        None => Vec::new(),
    };

    // Surface unknown field names before sweeping. Zero is accepted by every
    // known field, so only the name can fail here.
    apply_variable(&input.base_inputs, &input.variable_1.name, Decimal::ZERO)?;
    if let Some(var) = &input.variable_2 {
        apply_variable(&input.base_inputs, &var.name, Decimal::ZERO)?;
    }

    let mut evaluate = |point: PlanResult<RetirementPlanInput>, label: String| -> Option<Decimal> {
        match point.and_then(|p| validate(&p).map(|()| p)) {
            Ok(p) => input.output_metric.extract(&compute(&p)),
            Err(e) => {
                log::warn!("sensitivity point {label} skipped: {e}");
                warnings.push(format!("Evaluation skipped at {label}: {e}"));
                None
            }
        }
    };

    let row_width = if input.variable_2.is_some() { v2_values.len() } else { 1 };
    let mut matrix = Vec::with_capacity(v1_values.len());
    for &v1 in &v1_values {
        let row_input = apply_variable(&input.base_inputs, &input.variable_1.name, v1);
        let row = match (row_input, &input.variable_2) {
            (Ok(row_input), Some(var)) => v2_values
                .iter()
                .map(|&v2| {
                    let point = apply_variable(&row_input, &var.name, v2);
                    evaluate(point, format!("({v1}, {v2})"))
                })
                .collect(),
            (Ok(row_input), None) => vec![evaluate(Ok(row_input), format!("({v1})"))],
            // The whole row shares the bad value; warn once.
            (Err(e), _) => {
                let mut row = vec![evaluate(Err(e), format!("({v1})"))];
                row.resize(row_width, None);
                row
            }
        };
        matrix.push(row);
    }

    let base_case_value = input.output_metric.extract(&compute(&input.base_inputs));

    let output = SensitivityOutput {
        variable_1_name: input.variable_1.name.clone(),
        variable_2_name: input.variable_2.as_ref().map(|v| v.name.clone()),
        variable_1_values: v1_values,
        variable_2_values: v2_values,
        output_metric: input.output_metric,
        matrix,
        base_case_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement plan sensitivity analysis",
        &serde_json::json!({
            "variable_1": input.variable_1.name,
            "variable_2": input.variable_2.as_ref().map(|v| v.name.clone()),
            "output_metric": input.output_metric.name(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
