use crate::{
    account::{Account, AccountBook, AccountId},
    ledger::LedgerError,
    split::even_split,
    transaction::Transaction,
    Role,
};
use log::{error, trace};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Account balances produced by replaying a transaction log.
///
/// A sheet starts with every account in the book at zero. It is a scratch copy: the
/// book's own balances are only touched once a replay has succeeded, so observers
/// never see the intermediate zeroed state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceSheet {
    balances: BTreeMap<AccountId, Decimal>,
}

impl BalanceSheet {
    fn zeroed(accounts: &AccountBook) -> Self {
        BalanceSheet {
            balances: accounts.iter().map(|a| (a.id(), Decimal::ZERO)).collect(),
        }
    }

    pub(crate) fn get(&self, id: AccountId) -> Option<Decimal> {
        self.balances.get(&id).copied()
    }

    fn deposit(&mut self, id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let balance = self.balances.entry(id).or_insert(Decimal::ZERO);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| overflowed(id, amount))?;
        Ok(())
    }

    fn withdraw(&mut self, id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let balance = self.balances.entry(id).or_insert(Decimal::ZERO);
        *balance = balance
            .checked_sub(amount)
            .ok_or_else(|| overflowed(id, amount))?;
        Ok(())
    }
}

fn overflowed(id: AccountId, amount: Decimal) -> LedgerError {
    error!("moving {} would overflow the balance of {}", amount, id);
    LedgerError::InvalidArgument(format!(
        "moving {} would overflow the balance of account {}",
        amount, id
    ))
}

/// Recompute every balance from scratch by replaying `transactions` in order.
///
/// A debit transaction is funded by every credit account: its amount is split evenly
/// between them (earlier accounts absorb any rounding remainder) and each share is
/// withdrawn. The full amount is then deposited into the transaction's own account,
/// whatever its role, so a debit account's balance is the sum of its own charges.
pub(crate) fn replay<'a, I>(
    accounts: &AccountBook,
    transactions: I,
) -> Result<BalanceSheet, LedgerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sheet = BalanceSheet::zeroed(accounts);

    // Accounts are never removed mid-replay, so the funding set is fixed for the run
    let creditors: Vec<AccountId> = accounts
        .accounts_of_role(Role::Credit)
        .map(Account::id)
        .collect();

    for (position, transaction) in transactions.into_iter().enumerate() {
        let target = match accounts.get(transaction.account()) {
            Some(a) => a.id(),
            None => {
                error!(
                    "transaction {} references unknown account {}",
                    position,
                    transaction.account()
                );
                return Err(LedgerError::AccountNotFound(transaction.account()));
            }
        };

        if transaction.role() == Role::Debit {
            if creditors.is_empty() {
                error!(
                    "transaction {} is a debit but there are no credit accounts to fund it",
                    position
                );
                return Err(LedgerError::NoCreditAccounts);
            }

            let shares = even_split(transaction.amount(), creditors.len())?;

            for (creditor, share) in creditors.iter().zip(shares) {
                trace!(
                    "transaction {}: withdraw {} from {}",
                    position,
                    share,
                    creditor
                );
                sheet.withdraw(*creditor, share)?;
            }
        }

        trace!(
            "transaction {}: deposit {} into {}",
            position,
            transaction.amount(),
            target
        );
        sheet.deposit(target, transaction.amount())?;
    }

    Ok(sheet)
}
