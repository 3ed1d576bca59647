use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::projector::{round_dp, round_money, SAFE_WITHDRAWAL_RATE};
use crate::time_value::annuity_payment_for_fv;
use crate::types::{Money, Percent, Rate};

/// Upper bound on the "keep working" search. Keeps the loop finite when
/// contributions can never close the gap.
pub const MAX_EXTRA_WORKING_YEARS: u32 = 20;

/// Ways to close a projected shortfall, each considered on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedChanges {
    /// Extra yearly saving, on top of the current contribution, until
    /// retirement.
    pub additional_annual_savings_needed: Money,
    /// Extra years of work (capped at [`MAX_EXTRA_WORKING_YEARS`]).
    pub additional_working_years: u32,
    /// Income target, as a percentage of inflation-adjusted current income,
    /// the plan supports as it stands.
    pub adjusted_income_needed_pct: Percent,
}

/// Unrounded figures from a projection that came up short.
#[derive(Debug, Clone)]
pub struct ShortfallGap {
    /// Positive annual gap between the need and the safe withdrawal.
    pub shortfall: Money,
    pub return_rate: Rate,
    pub years_to_retirement: u32,
    pub total_savings: Money,
    pub annual_contribution: Money,
    pub income_from_savings: Money,
    pub safe_withdrawal: Money,
    /// Social security plus other income, in retirement-year dollars.
    pub future_other_income: Money,
    pub future_annual_income: Money,
}

pub fn recommend_changes(gap: &ShortfallGap) -> RecommendedChanges {
    // Capital the 4% rule needs to cover the gap, saved as a level annuity.
    let extra_capital = gap.shortfall / SAFE_WITHDRAWAL_RATE;
    let additional_annual_savings =
        annuity_payment_for_fv(extra_capital, gap.return_rate, gap.years_to_retirement);

    RecommendedChanges {
        additional_annual_savings_needed: round_money(additional_annual_savings),
        additional_working_years: extra_working_years(gap),
        adjusted_income_needed_pct: round_dp(sustainable_income_pct(gap), 2),
    }
}

fn extra_working_years(gap: &ShortfallGap) -> u32 {
    let growth = Decimal::ONE + gap.return_rate;
    let mut savings = gap.total_savings;
    let mut years = 0;
    while savings * SAFE_WITHDRAWAL_RATE < gap.income_from_savings
        && years < MAX_EXTRA_WORKING_YEARS
    {
        savings = savings * growth + gap.annual_contribution;
        years += 1;
    }
    years
}

fn sustainable_income_pct(gap: &ShortfallGap) -> Percent {
    if gap.future_annual_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (gap.safe_withdrawal + gap.future_other_income) / gap.future_annual_income
        * Decimal::ONE_HUNDRED
}
