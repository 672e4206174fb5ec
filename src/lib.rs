mod account;
mod draft;
mod ledger;
mod observer;
mod redistribution;
mod script;
mod seed;
mod split;
mod transaction;

use rust_decimal::Decimal;
use std::{fmt, str::FromStr};

pub use account::{Account, AccountBook, AccountId, AccountSummary};
pub use draft::TransactionDraft;
pub use ledger::{Ledger, LedgerError};
pub use observer::{LedgerObserver, SubscriptionId};
pub use script::{Preset, ScriptStep, ScriptedUser};
pub use seed::SEED_ACCOUNTS;
pub use split::{even_split, SplitError};
pub use transaction::{Transaction, TransactionId};

// This represents the number of decimal places that a currency can validly express.
// @todo Support the full range of currency precisions specified in ISO 4217.
const CURRENCY_PRECISION: u32 = 2;

/// Whether money is coming in (`Credit`) or going out (`Debit`).
///
/// Both accounts and transactions carry a role. A debit transaction is funded by
/// every credit account at the time the ledger is replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Credit,
    Debit,
}

impl Default for Role {
    fn default() -> Self {
        Role::Credit
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Credit => write!(f, "credit"),
            Role::Debit => write!(f, "debit"),
        }
    }
}

impl FromStr for Role {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Role::Credit),
            "debit" => Ok(Role::Debit),
            _ => Err(LedgerError::InvalidArgument(format!(
                "'{}' is not an account role",
                s
            ))),
        }
    }
}

// Returns whether a value can be expressed in whole cents
fn is_whole_cents(value: Decimal) -> bool {
    value.round_dp(CURRENCY_PRECISION) == value
}
