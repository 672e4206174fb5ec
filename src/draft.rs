use crate::{Account, AccountBook, AccountId, Ledger, LedgerError, Role, TransactionId};
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A transaction that is still being filled in.
///
/// This models the transaction input form. A draft always targets the first account
/// of its role unless another account is picked, and switching the role re-targets
/// the draft at the first account of the new role.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    role: Role,
    amount: Decimal,
    account: Option<AccountId>,
    description: String,
}

impl TransactionDraft {
    /// A blank credit draft
    pub fn new(accounts: &AccountBook) -> Self {
        let role = Role::default();

        TransactionDraft {
            role,
            amount: Decimal::new(0, 2),
            account: first_of_role(accounts, role),
            description: String::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn account(&self) -> Option<AccountId> {
        self.account
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Switch role, targeting the first account with the new role
    pub fn with_role(&mut self, accounts: &AccountBook, role: Role) -> &mut Self {
        self.role = role;
        self.account = first_of_role(accounts, role);
        self
    }

    pub fn with_account(&mut self, account: AccountId) -> &mut Self {
        self.account = Some(account);
        self
    }

    pub fn with_amount(&mut self, amount: Decimal) -> &mut Self {
        self.amount = amount;
        self
    }

    /// Set the amount from user input such as `"100.55"`
    pub fn with_amount_str(&mut self, amount: &str) -> Result<&mut Self, LedgerError> {
        self.amount = Decimal::from_str(amount.trim()).map_err(|_| {
            LedgerError::InvalidArgument(format!("'{}' is not a currency amount", amount))
        })?;
        Ok(self)
    }

    pub fn with_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Append this draft to `ledger`, returning the new transaction and a blank draft
    /// to fill in next
    pub fn submit(
        self,
        ledger: &mut Ledger,
    ) -> Result<(TransactionId, TransactionDraft), LedgerError> {
        let account = self.account.ok_or_else(|| {
            LedgerError::InvalidArgument(format!("there is no {} account to target", self.role))
        })?;

        debug!(
            "submitting {} draft of {} for {}",
            self.role, self.amount, account
        );

        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description)
        };

        let id = ledger.append_transaction(self.amount, self.role, account, description, None)?;

        Ok((id, ledger.draft()))
    }
}

fn first_of_role(accounts: &AccountBook, role: Role) -> Option<AccountId> {
    accounts.accounts_of_role(role).next().map(Account::id)
}
