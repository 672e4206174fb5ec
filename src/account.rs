use crate::{ledger::LedgerError, redistribution::BalanceSheet, Role};
use log::debug;
use rust_decimal::Decimal;
use std::fmt;

/// Stable identifier for an `Account`. Identifiers are handed out in creation order
/// and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A source (credit) or destination (debit) of money.
///
/// The balance of an account is owned by the ledger: it is only ever set from the
/// result of a full replay of the transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    name: String,
    role: Role,
    colour: Option<String>,
    balance: Decimal,
}

/// A read-only snapshot of an account, as handed to observers and views
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub name: String,
    pub role: Role,
    pub balance: Decimal,
}

/// The chart of accounts.
///
/// Accounts are kept in creation order, which is also the order that credit
/// accounts fund a debit.
#[derive(Debug, Default, Clone)]
pub struct AccountBook {
    accounts: Vec<Account>,
    next_id: u32,
}

impl Account {
    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Display colour for views, if one was given
    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
            balance: self.balance,
        }
    }
}

impl AccountBook {
    /// Create an empty book. See `AccountBook::seeded` for the default chart.
    pub fn new() -> Self {
        AccountBook::default()
    }

    /// Create a new account with a zero balance.
    ///
    /// Names must not be blank, and must be unique among accounts of the same role.
    pub fn create_account<S: Into<String>>(
        &mut self,
        name: S,
        role: Role,
    ) -> Result<AccountId, LedgerError> {
        self.create_coloured_account(name, role, None)
    }

    /// As `create_account`, also recording a display colour for views
    pub fn create_coloured_account<S: Into<String>>(
        &mut self,
        name: S,
        role: Role,
        colour: Option<String>,
    ) -> Result<AccountId, LedgerError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(LedgerError::InvalidArgument(
                "account names cannot be blank".into(),
            ));
        }

        if self.iter().any(|a| a.role == role && a.name == name) {
            return Err(LedgerError::InvalidArgument(format!(
                "a {} account named '{}' already exists",
                role, name
            )));
        }

        Ok(self.insert(name, role, colour))
    }

    // Add an account without validation. Callers must guarantee the name is unique
    // within its role.
    pub(crate) fn insert(&mut self, name: String, role: Role, colour: Option<String>) -> AccountId {
        let id = AccountId(self.next_id);
        self.next_id += 1;

        debug!("creating {} account {} '{}'", role, id, name);

        self.accounts.push(Account {
            id,
            name,
            role,
            colour,
            balance: Decimal::ZERO,
        });

        id
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn balance_of(&self, id: AccountId) -> Result<Decimal, LedgerError> {
        self.get(id)
            .map(Account::balance)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    /// All accounts with the given role, in creation order
    pub fn accounts_of_role(&self, role: Role) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(move |a| a.role == role)
    }

    pub fn summaries_of_role(&self, role: Role) -> Vec<AccountSummary> {
        self.accounts_of_role(role).map(Account::summary).collect()
    }

    /// The identifier of the first account (in creation order) with this name
    pub fn identifier_by_name(&self, name: &str) -> Result<AccountId, LedgerError> {
        self.accounts
            .iter()
            .find(|a| a.name == name)
            .map(Account::id)
            .ok_or_else(|| LedgerError::AccountNameNotFound(name.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of every account balance, or `None` if the sum overflows
    pub fn total_balance(&self) -> Option<Decimal> {
        self.accounts
            .iter()
            .try_fold(Decimal::ZERO, |total, a| total.checked_add(a.balance))
    }

    // Overwrite every balance with the result of a replay. Returns the accounts whose
    // balance changed, along with their previous balance.
    pub(crate) fn commit(&mut self, sheet: &BalanceSheet) -> Vec<(AccountId, Decimal)> {
        let mut changed = Vec::new();

        for account in self.accounts.iter_mut() {
            let balance = sheet.get(account.id).unwrap_or(Decimal::ZERO);

            if balance != account.balance {
                changed.push((account.id, account.balance));
                account.balance = balance;
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_account_assigns_sequential_ids() {
        let mut book = AccountBook::new();
        let pay = book.create_account("Pay", Role::Credit).unwrap();
        let food = book.create_account("Food", Role::Debit).unwrap();

        assert_ne!(pay, food);
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(pay).map(Account::name), Some("Pay"));
        assert_eq!(book.balance_of(food), Ok(Decimal::ZERO));
    }

    #[test]
    fn create_account_blank_name() {
        let mut book = AccountBook::new();
        assert!(matches!(
            book.create_account("  ", Role::Credit),
            Err(LedgerError::InvalidArgument(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn create_account_names_unique_per_role() {
        let mut book = AccountBook::new();
        book.create_account("Savings", Role::Credit).unwrap();

        assert!(matches!(
            book.create_account("Savings", Role::Credit),
            Err(LedgerError::InvalidArgument(_))
        ));
        assert!(book.create_account("Savings", Role::Debit).is_ok());
    }

    #[test]
    fn accounts_of_role_in_creation_order() {
        let mut book = AccountBook::new();
        let a = book.create_account("A", Role::Credit).unwrap();
        book.create_account("D", Role::Debit).unwrap();
        let b = book.create_account("B", Role::Credit).unwrap();

        let credit: Vec<AccountId> = book.accounts_of_role(Role::Credit).map(Account::id).collect();
        assert_eq!(credit, vec![a, b]);

        let summaries = book.summaries_of_role(Role::Debit);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "D");
    }

    #[test]
    fn identifier_by_name_first_match() {
        let mut book = AccountBook::new();
        let credit = book.create_account("Other", Role::Credit).unwrap();
        book.create_account("Other", Role::Debit).unwrap();

        assert_eq!(book.identifier_by_name("Other"), Ok(credit));
        assert_eq!(
            book.identifier_by_name("Missing"),
            Err(LedgerError::AccountNameNotFound("Missing".into()))
        );
    }

    #[test]
    fn balance_of_unknown_account() {
        let book = AccountBook::new();
        assert_eq!(
            book.balance_of(AccountId(3)),
            Err(LedgerError::AccountNotFound(AccountId(3)))
        );
    }
}
