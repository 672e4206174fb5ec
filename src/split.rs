use crate::is_whole_cents;
use log::trace;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SplitError {
    #[error("cannot split a negative amount")]
    NegativeAmount,
    #[error("cannot split an amount between zero recipients")]
    NoRecipients,
    #[error("currency values cannot have more than 2 decimal places")]
    CurrencyPrecision,
    #[error("the amount {0} is too large to split into cents")]
    Overflow(Decimal),
}

/// Divide `amount` into `parts` whole-cent shares that sum to exactly `amount`.
///
/// Each share is the remaining cents divided by the number of recipients still to be
/// paid, rounded to the nearest cent (halves round up). This pushes any rounding
/// remainder onto the earlier shares, e.g. $100.55 between three accounts is
/// `[33.52, 33.52, 33.51]`.
pub fn even_split(amount: Decimal, parts: usize) -> Result<Vec<Decimal>, SplitError> {
    if parts == 0 {
        return Err(SplitError::NoRecipients);
    }

    if amount < Decimal::ZERO {
        return Err(SplitError::NegativeAmount);
    }

    if !is_whole_cents(amount) {
        return Err(SplitError::CurrencyPrecision);
    }

    // Work in cents so that every share is a whole number
    let mut remainder = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(SplitError::Overflow(amount))?;
    let mut shares = Vec::with_capacity(parts);

    for i in 0..parts {
        let parts_left = Decimal::from(parts - i);
        let share = (remainder / parts_left)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        remainder -= share;
        shares.push(share / Decimal::ONE_HUNDRED);
    }

    trace!("split {} between {} parts: {:?}", amount, parts, shares);

    // The shares must add back up to the amount, or our maths is fundamentally broken!
    debug_assert_eq!(remainder, Decimal::ZERO);

    Ok(shares)
}
