use crate::{
    observer::Observers,
    redistribution::{replay, BalanceSheet},
    split::SplitError,
    Account, AccountBook, AccountId, AccountSummary, LedgerObserver, Role, SubscriptionId,
    Transaction, TransactionDraft, TransactionId,
};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("account {0} does not exist")]
    AccountNotFound(AccountId),
    #[error("no account is named '{0}'")]
    AccountNameNotFound(String),
    #[error("a debit cannot be funded without any credit accounts")]
    NoCreditAccounts,
}

impl From<SplitError> for LedgerError {
    fn from(e: SplitError) -> Self {
        LedgerError::InvalidArgument(e.to_string())
    }
}

/// The transaction log, and the only thing allowed to change account balances.
///
/// Every append replays the whole log against the chart of accounts (see
/// `redistribution::replay`). A call either appends and redistributes completely, or
/// leaves the log and every balance exactly as they were.
#[derive(Debug)]
pub struct Ledger {
    accounts: AccountBook,
    transactions: Vec<Transaction>,
    observers: Observers,
    // This allows overriding the current time for testing
    clock: fn() -> DateTime<Utc>,
}

impl Ledger {
    pub fn new(accounts: AccountBook) -> Self {
        Ledger {
            accounts,
            transactions: Vec::new(),
            observers: Observers::default(),
            clock: Utc::now,
        }
    }

    /// Use `clock` to timestamp transactions that are appended without one
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn accounts(&self) -> &AccountBook {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(id.position())
    }

    pub fn balance_of(&self, id: AccountId) -> Result<Decimal, LedgerError> {
        self.accounts.balance_of(id)
    }

    pub fn accounts_of_role(&self, role: Role) -> Vec<AccountSummary> {
        self.accounts.summaries_of_role(role)
    }

    pub fn identifier_by_name(&self, name: &str) -> Result<AccountId, LedgerError> {
        self.accounts.identifier_by_name(name)
    }

    /// Sum of every account balance, or `None` if the sum overflows
    pub fn total_balance(&self) -> Option<Decimal> {
        self.accounts.total_balance()
    }

    /// A blank input form: a credit transaction aimed at the first credit account
    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft::new(&self.accounts)
    }

    pub fn subscribe(&mut self, observer: Box<dyn LedgerObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Add an account to the chart. The account starts at zero and takes part in the
    /// next replay; existing balances are not redistributed until then.
    pub fn create_account<S: Into<String>>(
        &mut self,
        name: S,
        role: Role,
    ) -> Result<AccountId, LedgerError> {
        let id = self.accounts.create_account(name, role)?;

        if let Some(account) = self.accounts.get(id) {
            let summary = account.summary();
            self.observers.notify(|o| o.account_created(&summary));
        }

        Ok(id)
    }

    /// Append a transaction to the log and redistribute funds.
    ///
    /// If `timestamp` is `None` the transaction is stamped with the ledger's clock.
    pub fn append_transaction(
        &mut self,
        amount: Decimal,
        role: Role,
        account: AccountId,
        description: Option<String>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<TransactionId, LedgerError> {
        if self.accounts.get(account).is_none() {
            warn!("refusing transaction for unknown account {}", account);
            return Err(LedgerError::AccountNotFound(account));
        }

        let transaction = Transaction::new(
            amount,
            role,
            account,
            description.unwrap_or_default(),
            timestamp.unwrap_or_else(self.clock),
        )?;

        let id = TransactionId::from_position(self.transactions.len());
        debug!("appending {} {} of {} to {}", role, id, amount, account);

        // Nothing is committed until the log including this transaction replays
        let sheet = replay(
            &self.accounts,
            self.transactions.iter().chain(std::iter::once(&transaction)),
        )
        .map_err(|e| {
            warn!("could not redistribute funds for {}: {}", id, e);
            e
        })?;

        self.transactions.push(transaction);
        self.commit(&sheet);

        if let Some(transaction) = self.transactions.last() {
            self.observers
                .notify(|o| o.transaction_appended(id, transaction));
        }

        Ok(id)
    }

    /// Replay the whole log and update balances, notifying observers of every account
    /// whose balance changed. Replaying an unchanged log changes nothing.
    pub fn redistribute(&mut self) -> Result<(), LedgerError> {
        let sheet = replay(&self.accounts, &self.transactions)?;
        self.commit(&sheet);
        Ok(())
    }

    fn commit(&mut self, sheet: &BalanceSheet) {
        for (id, previous) in self.accounts.commit(sheet) {
            if let Some(account) = self.accounts.get(id) {
                let summary = account.summary();
                debug!(
                    "balance of {} '{}' changed from {} to {}",
                    id, summary.name, previous, summary.balance
                );
                self.observers
                    .notify(|o| o.balance_changed(&summary, previous));
            }
        }
    }
}

impl Default for Ledger {
    /// A ledger over the default seeded chart of accounts
    fn default() -> Self {
        Ledger::new(AccountBook::seeded())
    }
}
