use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::remediation::{self, RecommendedChanges, ShortfallGap};
use crate::error::RetirementPlanError;
use crate::time_value::{compound, depletion_years, fv_annuity, fv_lump_sum};
use crate::types::{pct_to_rate, with_metadata, ComputationOutput, Money, Percent, Rate, Years};
use crate::PlanResult;

/// Fraction of the retirement balance that can be drawn each year
/// (the 4% rule).
pub const SAFE_WITHDRAWAL_RATE: Rate = dec!(0.04);

/// Oldest life expectancy accepted. Together with [`MAX_RATE_PCT`] keeps
/// compounded balances inside Decimal's range.
pub const MAX_AGE: u32 = 130;

/// Highest return or inflation percentage accepted.
pub const MAX_RATE_PCT: Percent = dec!(30);

/// Largest currency amount accepted on any input field. At the age and rate
/// caps this still compounds to well under Decimal's ~7.9e28 ceiling.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000);

/// Highest `income_needed_pct` accepted.
pub const MAX_INCOME_NEEDED_PCT: Percent = dec!(200);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Personal and financial inputs for a retirement projection.
///
/// Rates are percentages as entered on the planner form (7 = 7%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlanInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub current_savings: Money,
    pub current_income: Money,
    pub annual_contribution: Money,
    #[serde(default)]
    pub social_security_annual: Money,
    #[serde(default)]
    pub other_income_annual: Money,
    pub expected_return_rate_pct: Percent,
    pub inflation_rate_pct: Percent,
    /// Desired retirement income as a percentage of inflation-adjusted
    /// current income.
    pub income_needed_pct: Percent,
}

/// Which side of retirement a projected year falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Accumulation,
    Distribution,
}

/// Savings balance at the end of one projected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub age: u32,
    pub year_index: u32,
    pub savings_balance: Money,
    pub phase: Phase,
}

/// Annual retirement income by source, in retirement-year dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementIncome {
    pub from_savings: Money,
    pub social_security: Money,
    pub other_income: Money,
    pub total: Money,
}

/// Output of [`compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlanResult {
    pub years_to_retirement: u32,
    pub years_in_retirement: u32,
    pub total_retirement_savings: Money,
    pub annual_income_needed: Money,
    pub annual_income_from_savings: Money,
    pub safe_annual_withdrawal: Money,
    pub annual_surplus_or_shortfall: Money,
    /// `None` when savings never run out under the withdrawal plan.
    pub savings_depletion_years: Option<Years>,
    pub retirement_income: RetirementIncome,
    pub projection: Vec<ProjectionYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_changes: Option<RecommendedChanges>,
}

impl RetirementPlanResult {
    pub fn has_shortfall(&self) -> bool {
        self.annual_surplus_or_shortfall < Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round a currency amount to whole units, halves away from zero.
pub(crate) fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

pub(crate) fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn invalid(field: &str, reason: impl Into<String>) -> RetirementPlanError {
    RetirementPlanError::InvalidPlanInput {
        field: field.into(),
        reason: reason.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject inputs [`compute`] is not defined for.
pub fn validate(input: &RetirementPlanInput) -> PlanResult<()> {
    if input.retirement_age <= input.current_age {
        return Err(invalid(
            "retirement_age",
            "retirement_age must be greater than current_age",
        ));
    }
    if input.life_expectancy <= input.retirement_age {
        return Err(invalid(
            "life_expectancy",
            "life_expectancy must be greater than retirement_age",
        ));
    }
    if input.life_expectancy > MAX_AGE {
        return Err(invalid(
            "life_expectancy",
            format!("life_expectancy must be <= {MAX_AGE}"),
        ));
    }

    let amounts = [
        ("current_savings", input.current_savings),
        ("current_income", input.current_income),
        ("annual_contribution", input.annual_contribution),
        ("social_security_annual", input.social_security_annual),
        ("other_income_annual", input.other_income_annual),
    ];
    for (field, value) in amounts {
        if value < Decimal::ZERO {
            return Err(invalid(field, format!("{field} must be >= 0")));
        }
        if value > MAX_AMOUNT {
            return Err(invalid(field, format!("{field} must be <= {MAX_AMOUNT}")));
        }
    }

    let rates = [
        ("expected_return_rate_pct", input.expected_return_rate_pct),
        ("inflation_rate_pct", input.inflation_rate_pct),
    ];
    for (field, value) in rates {
        if value <= dec!(-100) || value > MAX_RATE_PCT {
            return Err(invalid(
                field,
                format!("{field} must be greater than -100% and at most {MAX_RATE_PCT}%"),
            ));
        }
    }

    let need_pct = input.income_needed_pct;
    if need_pct < Decimal::ZERO || need_pct > MAX_INCOME_NEEDED_PCT {
        return Err(invalid(
            "income_needed_pct",
            format!("income_needed_pct must be between 0 and {MAX_INCOME_NEEDED_PCT}"),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project savings at retirement, the sustainable withdrawal, and the
/// year-by-year balance through life expectancy.
///
/// Pure and infallible. Inputs are expected to have passed [`validate`];
/// out-of-order ages collapse to zero-length phases rather than panicking.
pub fn compute(input: &RetirementPlanInput) -> RetirementPlanResult {
    let years_to_retirement = input.retirement_age.saturating_sub(input.current_age);
    let years_in_retirement = input.life_expectancy.saturating_sub(input.retirement_age);

    let return_rate = pct_to_rate(input.expected_return_rate_pct);
    let inflation_rate = pct_to_rate(input.inflation_rate_pct);

    // --- Savings at retirement ---
    let total_savings = fv_lump_sum(input.current_savings, return_rate, years_to_retirement)
        + fv_annuity(input.annual_contribution, return_rate, years_to_retirement);

    // --- Income need in retirement-year dollars ---
    let inflation_factor = compound(inflation_rate, years_to_retirement);
    let future_annual_income = input.current_income * inflation_factor;
    let annual_income_needed = future_annual_income * pct_to_rate(input.income_needed_pct);
    let future_social_security = input.social_security_annual * inflation_factor;
    let future_other_income = input.other_income_annual * inflation_factor;
    let income_from_savings = annual_income_needed - future_social_security - future_other_income;

    let safe_withdrawal = total_savings * SAFE_WITHDRAWAL_RATE;
    let surplus_or_shortfall = safe_withdrawal - income_from_savings;

    let real_return = return_rate - inflation_rate;
    let depletion = depletion_years(total_savings, income_from_savings, real_return);

    let projection = project_years(
        input,
        years_to_retirement,
        years_in_retirement,
        return_rate,
        inflation_rate,
        income_from_savings,
    );

    let recommended_changes = if surplus_or_shortfall < Decimal::ZERO {
        Some(remediation::recommend_changes(&ShortfallGap {
            shortfall: -surplus_or_shortfall,
            return_rate,
            years_to_retirement,
            total_savings,
            annual_contribution: input.annual_contribution,
            income_from_savings,
            safe_withdrawal,
            future_other_income: future_social_security + future_other_income,
            future_annual_income,
        }))
    } else {
        None
    };

    RetirementPlanResult {
        years_to_retirement,
        years_in_retirement,
        total_retirement_savings: round_money(total_savings),
        annual_income_needed: round_money(annual_income_needed),
        annual_income_from_savings: round_money(income_from_savings),
        safe_annual_withdrawal: round_money(safe_withdrawal),
        annual_surplus_or_shortfall: round_money(surplus_or_shortfall),
        savings_depletion_years: depletion.map(|years| round_dp(years, 1)),
        retirement_income: RetirementIncome {
            from_savings: round_money(safe_withdrawal),
            social_security: round_money(future_social_security),
            other_income: round_money(future_other_income),
            total: round_money(safe_withdrawal + future_social_security + future_other_income),
        },
        projection,
        recommended_changes,
    }
}

/// Year-0 snapshot, then one row per accumulation year, then distribution
/// years until life expectancy or the first year the balance hits zero.
fn project_years(
    input: &RetirementPlanInput,
    years_to_retirement: u32,
    years_in_retirement: u32,
    return_rate: Rate,
    inflation_rate: Rate,
    income_from_savings: Money,
) -> Vec<ProjectionYear> {
    let growth = Decimal::ONE + return_rate;
    let mut rows = Vec::with_capacity((years_to_retirement + years_in_retirement + 1) as usize);
    let mut balance = input.current_savings;

    rows.push(ProjectionYear {
        age: input.current_age,
        year_index: 0,
        savings_balance: round_money(balance),
        phase: Phase::Accumulation,
    });

    for yr in 1..=years_to_retirement {
        balance = balance * growth + input.annual_contribution;
        rows.push(ProjectionYear {
            age: input.current_age + yr,
            year_index: yr,
            savings_balance: round_money(balance),
            phase: Phase::Accumulation,
        });
    }

    // A negative need means other income covers it; nothing is withdrawn.
    let mut withdrawal = income_from_savings.max(Decimal::ZERO);
    for yr in 1..=years_in_retirement {
        balance = (balance * growth - withdrawal).max(Decimal::ZERO);
        rows.push(ProjectionYear {
            age: input.retirement_age + yr,
            year_index: years_to_retirement + yr,
            savings_balance: round_money(balance),
            phase: Phase::Distribution,
        });
        if balance.is_zero() {
            break;
        }
        withdrawal *= Decimal::ONE + inflation_rate;
    }

    rows
}

/// Validate, project, and wrap the result with methodology and warnings.
pub fn plan_retirement(
    input: &RetirementPlanInput,
) -> PlanResult<ComputationOutput<RetirementPlanResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;
    let result = compute(input);

    log::debug!(
        "retirement plan: ages {}/{}/{}, savings at retirement {}, safe withdrawal {}, surplus {}",
        input.current_age,
        input.retirement_age,
        input.life_expectancy,
        result.total_retirement_savings,
        result.safe_annual_withdrawal,
        result.annual_surplus_or_shortfall,
    );

    if let Some(years) = result.savings_depletion_years {
        if years < Decimal::from(result.years_in_retirement) {
            warnings.push(format!(
                "Savings projected to run out after {years} years in retirement (before life expectancy)"
            ));
        }
    }
    if result.has_shortfall() {
        warnings.push(format!(
            "Projected annual shortfall of {} against the 4% safe withdrawal",
            -result.annual_surplus_or_shortfall
        ));
    }
    if input.expected_return_rate_pct < input.inflation_rate_pct {
        warnings.push("Expected return is below inflation; savings lose purchasing power".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement projection (compound accumulation, 4% safe withdrawal, annuity depletion)",
        &serde_json::json!({
            "current_age": input.current_age,
            "retirement_age": input.retirement_age,
            "life_expectancy": input.life_expectancy,
            "expected_return_rate_pct": input.expected_return_rate_pct.to_string(),
            "inflation_rate_pct": input.inflation_rate_pct.to_string(),
            "income_needed_pct": input.income_needed_pct.to_string(),
            "safe_withdrawal_rate": SAFE_WITHDRAWAL_RATE.to_string(),
        }),
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// The worked example: 35 -> 65 -> 90, modest savings and contributions.
    fn default_input() -> RetirementPlanInput {
        RetirementPlanInput {
            current_age: 35,
            retirement_age: 65,
            life_expectancy: 90,
            current_savings: dec!(10_000),
            current_income: dec!(50_000),
            annual_contribution: dec!(1_000),
            social_security_annual: Decimal::ZERO,
            other_income_annual: Decimal::ZERO,
            expected_return_rate_pct: dec!(7),
            inflation_rate_pct: dec!(2.5),
            income_needed_pct: dec!(75),
        }
    }

    /// Well-funded plan whose safe withdrawal covers the need.
    fn funded_input() -> RetirementPlanInput {
        RetirementPlanInput {
            current_savings: dec!(400_000),
            annual_contribution: dec!(25_000),
            social_security_annual: dec!(20_000),
            income_needed_pct: dec!(70),
            ..default_input()
        }
    }

    #[test]
    fn test_worked_example_total_savings() {
        let result = compute(&default_input());
        assert_eq!(result.years_to_retirement, 30);
        assert_eq!(result.years_in_retirement, 25);
        // 10_000 * 1.07^30 + 1_000 * (1.07^30 - 1) / 0.07 ≈ 76_122.55 + 94_460.78
        assert!(
            (result.total_retirement_savings - dec!(170_583)).abs() <= dec!(1),
            "got {}",
            result.total_retirement_savings
        );
    }

    #[test]
    fn test_safe_withdrawal_is_four_percent() {
        let result = compute(&default_input());
        let expected = round_money(result.total_retirement_savings * dec!(0.04));
        assert!((result.safe_annual_withdrawal - expected).abs() <= dec!(1));
    }

    #[test]
    fn test_income_needed_is_inflated() {
        let result = compute(&default_input());
        // 50_000 * 1.025^30 * 0.75 ≈ 78_658
        assert!(
            (result.annual_income_needed - dec!(78_658)).abs() <= dec!(2),
            "got {}",
            result.annual_income_needed
        );
        assert_eq!(result.annual_income_from_savings, result.annual_income_needed);
    }

    #[test]
    fn test_projection_starts_at_current_age() {
        let result = compute(&default_input());
        let first = &result.projection[0];
        assert_eq!(first.age, 35);
        assert_eq!(first.year_index, 0);
        assert_eq!(first.savings_balance, dec!(10_000));
        assert_eq!(first.phase, Phase::Accumulation);
    }

    #[test]
    fn test_projection_length_covers_accumulation() {
        let result = compute(&default_input());
        assert!(result.projection.len() >= result.years_to_retirement as usize + 1);
        let at_retirement = &result.projection[30];
        assert_eq!(at_retirement.age, 65);
        assert_eq!(at_retirement.phase, Phase::Accumulation);
        assert_eq!(at_retirement.savings_balance, result.total_retirement_savings);
    }

    #[test]
    fn test_distribution_stops_when_balance_hits_zero() {
        let result = compute(&default_input());
        let last = result.projection.last().unwrap();
        // 170k cannot fund ~79k a year for 25 years
        assert_eq!(last.phase, Phase::Distribution);
        assert_eq!(last.savings_balance, Decimal::ZERO);
        assert!(result.projection.len() < 30 + 1 + 25);
        let zeros = result
            .projection
            .iter()
            .filter(|row| row.savings_balance.is_zero())
            .count();
        assert_eq!(zeros, 1);
    }

    #[test]
    fn test_funded_plan_runs_to_life_expectancy() {
        let result = compute(&funded_input());
        assert!(!result.has_shortfall());
        assert!(result.recommended_changes.is_none());
        assert_eq!(result.projection.len(), 30 + 1 + 25);
        assert_eq!(result.projection.last().unwrap().age, 90);
    }

    #[test]
    fn test_withdrawal_grows_with_inflation() {
        // 105_000 at retirement, need 40_000 * 1.03 = 41_200 in the first year
        let input = RetirementPlanInput {
            current_age: 64,
            retirement_age: 65,
            life_expectancy: 70,
            current_savings: dec!(100_000),
            current_income: dec!(40_000),
            annual_contribution: Decimal::ZERO,
            social_security_annual: Decimal::ZERO,
            other_income_annual: Decimal::ZERO,
            expected_return_rate_pct: dec!(5),
            inflation_rate_pct: dec!(3),
            income_needed_pct: dec!(100),
        };
        let result = compute(&input);
        let balances: Vec<Money> = result.projection.iter().map(|r| r.savings_balance).collect();
        assert_eq!(balances[1], dec!(105_000));
        // 105_000 * 1.05 - 41_200
        assert_eq!(balances[2], dec!(69_050));
        // 69_050 * 1.05 - 41_200 * 1.03 = 30_066.5; a flat withdrawal would leave 31_303
        assert_eq!(balances[3], dec!(30_067));
        // 30_066.5 * 1.05 - 41_200 * 1.03^2 < 0
        assert_eq!(balances[4], Decimal::ZERO);
        assert_eq!(balances.len(), 5);
    }

    #[test]
    fn test_zero_savings_and_contribution() {
        let input = RetirementPlanInput {
            current_savings: Decimal::ZERO,
            annual_contribution: Decimal::ZERO,
            expected_return_rate_pct: dec!(12),
            ..default_input()
        };
        let result = compute(&input);
        assert_eq!(result.total_retirement_savings, Decimal::ZERO);
        assert_eq!(result.safe_annual_withdrawal, Decimal::ZERO);
        assert_eq!(result.savings_depletion_years, Some(Decimal::ZERO));
    }

    #[test]
    fn test_other_income_covers_need() {
        let input = RetirementPlanInput {
            social_security_annual: dec!(30_000),
            other_income_annual: dec!(15_000),
            ..default_input()
        };
        let result = compute(&input);
        assert!(result.annual_income_from_savings < Decimal::ZERO);
        assert_eq!(result.savings_depletion_years, None);
        assert!(result.recommended_changes.is_none());
        // Nothing withdrawn, so the balance keeps compounding
        let last = result.projection.last().unwrap();
        assert_eq!(last.age, 90);
        assert!(last.savings_balance > result.total_retirement_savings);
    }

    #[test]
    fn test_zero_real_return_depletes() {
        let input = RetirementPlanInput {
            expected_return_rate_pct: dec!(3),
            inflation_rate_pct: dec!(3),
            ..default_input()
        };
        let result = compute(&input);
        assert!(result.annual_income_from_savings > Decimal::ZERO);
        assert!(result.savings_depletion_years.is_some());
    }

    #[test]
    fn test_shortfall_populates_recommendations() {
        let input = RetirementPlanInput {
            current_savings: dec!(5_000),
            annual_contribution: dec!(500),
            income_needed_pct: dec!(100),
            ..default_input()
        };
        let result = compute(&input);
        assert!(result.has_shortfall());
        let changes = result.recommended_changes.unwrap();
        assert!(changes.additional_annual_savings_needed > Decimal::ZERO);
        assert!(changes.additional_working_years > 0);
        assert!(changes.adjusted_income_needed_pct < dec!(100));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = default_input();
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn test_retirement_income_breakdown() {
        let result = compute(&funded_input());
        let income = &result.retirement_income;
        assert_eq!(income.from_savings, result.safe_annual_withdrawal);
        assert!(income.social_security > dec!(20_000));
        assert_eq!(income.other_income, Decimal::ZERO);
        assert!((income.total - income.from_savings - income.social_security).abs() <= dec!(1));
    }

    #[test]
    fn test_validate_rejects_age_ordering() {
        let mut input = default_input();
        input.retirement_age = 35;
        match validate(&input) {
            Err(RetirementPlanError::InvalidPlanInput { field, .. }) => {
                assert_eq!(field, "retirement_age")
            }
            other => panic!("expected InvalidPlanInput, got {other:?}"),
        }

        let mut input = default_input();
        input.life_expectancy = 65;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let input = RetirementPlanInput {
            annual_contribution: dec!(-1),
            ..default_input()
        };
        assert!(validate(&input).is_err());
        assert!(validate(&default_input()).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates_and_ages() {
        let input = RetirementPlanInput {
            expected_return_rate_pct: dec!(45),
            ..default_input()
        };
        assert!(validate(&input).is_err());

        let input = RetirementPlanInput {
            inflation_rate_pct: dec!(-100),
            ..default_input()
        };
        assert!(validate(&input).is_err());

        let input = RetirementPlanInput {
            life_expectancy: 140,
            ..default_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_amounts() {
        let input = RetirementPlanInput {
            current_savings: dec!(5_000_000_000_000_000_000_000_000_000),
            ..default_input()
        };
        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            RetirementPlanError::InvalidPlanInput { ref field, .. } if field == "current_savings"
        ));

        let input = RetirementPlanInput {
            other_income_annual: MAX_AMOUNT + Decimal::ONE,
            ..default_input()
        };
        assert!(validate(&input).is_err());

        let input = RetirementPlanInput {
            income_needed_pct: MAX_INCOME_NEEDED_PCT + dec!(0.01),
            ..default_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_plan_retirement_at_input_bounds() {
        // Longest horizon at the top rate: every balance compounds 1.3^129.
        let maxed = RetirementPlanInput {
            current_age: 0,
            retirement_age: MAX_AGE - 1,
            life_expectancy: MAX_AGE,
            current_savings: MAX_AMOUNT,
            current_income: MAX_AMOUNT,
            annual_contribution: MAX_AMOUNT,
            social_security_annual: MAX_AMOUNT,
            other_income_annual: MAX_AMOUNT,
            expected_return_rate_pct: MAX_RATE_PCT,
            inflation_rate_pct: MAX_RATE_PCT,
            income_needed_pct: MAX_INCOME_NEEDED_PCT,
        };
        let output = plan_retirement(&maxed).unwrap();
        assert!(output.result.total_retirement_savings > MAX_AMOUNT);
        assert_eq!(output.result.projection.len(), MAX_AGE as usize + 1);

        // Same horizon with a large shortfall drives the remediation search.
        let short = RetirementPlanInput {
            annual_contribution: Decimal::ZERO,
            social_security_annual: Decimal::ZERO,
            other_income_annual: Decimal::ZERO,
            ..maxed.clone()
        };
        let output = plan_retirement(&short).unwrap();
        assert!(output.result.has_shortfall());
        assert!(output.result.recommended_changes.is_some());

        // Lowest rates over the same horizon.
        let low = RetirementPlanInput {
            expected_return_rate_pct: dec!(-99.9),
            inflation_rate_pct: MAX_RATE_PCT,
            ..maxed
        };
        assert!(plan_retirement(&low).is_ok());
    }

    #[test]
    fn test_compute_tolerates_invalid_ages() {
        let input = RetirementPlanInput {
            current_age: 70,
            retirement_age: 65,
            life_expectancy: 60,
            ..default_input()
        };
        let result = compute(&input);
        assert_eq!(result.years_to_retirement, 0);
        assert_eq!(result.projection.len(), 1);
    }

    #[test]
    fn test_plan_retirement_warnings() {
        let output = plan_retirement(&default_input()).unwrap();
        assert!(output.warnings.iter().any(|w| w.contains("run out")));
        assert!(output.warnings.iter().any(|w| w.contains("shortfall")));
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");

        let funded = plan_retirement(&funded_input()).unwrap();
        assert!(funded.warnings.is_empty(), "{:?}", funded.warnings);
    }

    #[test]
    fn test_plan_retirement_rejects_invalid() {
        let input = RetirementPlanInput {
            current_age: 65,
            ..default_input()
        };
        assert!(plan_retirement(&input).is_err());
    }
}
