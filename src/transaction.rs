use crate::{is_whole_cents, ledger::LedgerError, AccountId, Role};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Position of a transaction in the ledger
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(usize);

impl TransactionId {
    pub(crate) fn from_position(position: usize) -> Self {
        TransactionId(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx{}", self.0)
    }
}

/// A record of money movement.
///
/// The amount is always a positive magnitude; its direction comes from `role`.
/// Transactions are immutable once they have been appended to a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: Decimal,
    role: Role,
    account: AccountId,
    description: String,
    created_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        amount: Decimal,
        role: Role,
        account: AccountId,
        description: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidArgument(format!(
                "transaction amounts must be positive, got {}",
                amount
            )));
        }

        if !is_whole_cents(amount) {
            return Err(LedgerError::InvalidArgument(
                "currency values cannot have more than 2 decimal places".into(),
            ));
        }

        Ok(Transaction {
            amount,
            role,
            account,
            description,
            created_at,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The account the user selected for this transaction
    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
