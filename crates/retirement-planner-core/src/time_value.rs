use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate, Years};

/// Rates closer to zero than this are treated as zero in annuity formulas.
pub const RATE_EPSILON: Decimal = dec!(0.0000001);

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Future value of a lump sum left to grow for `n` years.
pub fn fv_lump_sum(present_value: Money, rate: Rate, n: u32) -> Money {
    present_value * compound(rate, n)
}

/// Future value of `n` level end-of-year deposits.
///
/// Equal to `Σ pmt * (1+r)^i` for `i` in `0..n`: the final deposit earns no
/// growth.
pub fn fv_annuity(pmt: Money, rate: Rate, n: u32) -> Money {
    if rate.abs() < RATE_EPSILON {
        return pmt * Decimal::from(n);
    }
    pmt * (compound(rate, n) - Decimal::ONE) / rate
}

/// Level end-of-year deposit needed to accumulate `target` after `n` years:
/// pmt = FV * r / ((1+r)^n - 1)
///
/// With no years left the whole target is due at once.
pub fn annuity_payment_for_fv(target: Money, rate: Rate, n: u32) -> Money {
    if n == 0 {
        return target;
    }
    if rate.abs() < RATE_EPSILON {
        return target / Decimal::from(n);
    }
    let denom = compound(rate, n) - Decimal::ONE;
    if denom.abs() < RATE_EPSILON {
        return target / Decimal::from(n);
    }
    target * rate / denom
}

/// Years until `balance` is exhausted by a level annual `withdrawal` while
/// earning `real_rate`. `None` means the balance is never exhausted.
///
/// Closed form: n = -ln(1 - B*r/W) / ln(1 + r). A real rate of zero
/// collapses to B / W.
pub fn depletion_years(balance: Money, withdrawal: Money, real_rate: Rate) -> Option<Years> {
    if withdrawal <= Decimal::ZERO {
        return None;
    }
    if balance <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    if withdrawal <= balance * real_rate {
        return None;
    }
    if real_rate.abs() < RATE_EPSILON || Decimal::ONE + real_rate <= Decimal::ZERO {
        return Some(balance / withdrawal);
    }

    let remaining = Decimal::ONE - balance * real_rate / withdrawal;
    let growth = (Decimal::ONE + real_rate).ln();
    if growth.is_zero() {
        return Some(balance / withdrawal);
    }
    Some(-remaining.ln() / growth)
}
