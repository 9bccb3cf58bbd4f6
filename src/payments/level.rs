use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};

/// level payment that amortizes `principal` over `months` at `monthly_rate`
///
/// payment = P * r / (1 - (1 + r)^-n), or P / n when r is zero.
/// Returns `None` when the result is degenerate: zero months, a
/// non-positive payment, or a rate/term pair whose discount factor cannot be
/// told apart from one.
pub fn level_payment(principal: Money, monthly_rate: Rate, months: u32) -> Option<Money> {
    if months == 0 {
        return None;
    }

    let r = monthly_rate.as_decimal();
    let p = principal.as_decimal();

    let payment = if r.is_zero() {
        p.checked_div(Decimal::from(months))?
    } else {
        // (1 + r)^-n underflows to zero for very long terms, leaving P * r
        let discount = match (Decimal::ONE + r).checked_powu(months as u64) {
            Some(compound) => Decimal::ONE.checked_div(compound)?,
            None => Decimal::ZERO,
        };
        let denominator = Decimal::ONE - discount;
        if denominator <= Decimal::ZERO {
            return None;
        }
        p.checked_mul(r)?.checked_div(denominator)?
    };

    let payment = Money::from_decimal(payment);
    payment.is_positive().then_some(payment)
}
