use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;
use zakat_common::error::{LedgerError, Result};
use zakat_common::transactions::Amount;

/// Levy charged on every transfer principal (2.5%).
pub const LEVY_RATE: Amount = dec!(0.025);

/// Fractional digits the levy is rounded to.
pub const LEVY_SCALE: u32 = 2;

pub struct LevyHandler;

impl LevyHandler {
    /// `round(amount * LEVY_RATE, LEVY_SCALE)`, half-up, applied once.
    pub fn levy_for(amount: Amount) -> Result<Amount> {
        let raw = amount
            .checked_mul(LEVY_RATE)
            .ok_or_else(|| LedgerError::InvalidAmount(format!("levy overflows for {}", amount)))?;
        Ok(raw.round_dp_with_strategy(LEVY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Principal plus levy, the amount debited from the sender.
    pub fn total_debit(amount: Amount, levy: Amount) -> Result<Amount> {
        exact_add(amount, levy)
            .ok_or_else(|| LedgerError::InvalidAmount(format!("total debit overflows for {}", amount)))
    }
}

/// `a + b` only when the sum is exact.
///
/// `Decimal::checked_add` fails on overflow but silently drops fractional
/// digits once the sum needs more than 28 significant digits. A sum whose
/// scale fell below the finest scale of its normalized operands lost digits.
pub(crate) fn exact_add(a: Amount, b: Amount) -> Option<Amount> {
    let sum = a.checked_add(b)?;
    let needed = a.normalize().scale().max(b.normalize().scale());
    (sum.scale() >= needed).then_some(sum)
}
