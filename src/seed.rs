use crate::{AccountBook, Role};

/// The default chart of accounts as `(name, role, colour)`, in creation order
pub const SEED_ACCOUNTS: [(&str, Role, &str); 9] = [
    ("Paycheques", Role::Credit, "#17370f"),
    ("Freelance", Role::Credit, "#17370f"),
    ("Lottery", Role::Credit, "#17370f"),
    ("Restaurants", Role::Debit, "#81f23e"),
    ("Groceries", Role::Debit, "#10fe23"),
    ("Work Expenses", Role::Debit, "#a3d20f"),
    ("Entertainment", Role::Debit, "#93ab12"),
    ("Rent", Role::Debit, "#0f12ef"),
    ("Utilities", Role::Debit, "#9f293a"),
];

impl AccountBook {
    /// A book holding the default accounts from `SEED_ACCOUNTS`
    pub fn seeded() -> Self {
        let mut book = AccountBook::new();

        for (name, role, colour) in SEED_ACCOUNTS.iter() {
            book.insert((*name).into(), *role, Some((*colour).into()));
        }

        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Account;

    #[test]
    fn seeded_book_order() {
        let book = AccountBook::seeded();

        let credit: Vec<&str> = book.accounts_of_role(Role::Credit).map(Account::name).collect();
        assert_eq!(credit, vec!["Paycheques", "Freelance", "Lottery"]);

        let debit: Vec<&str> = book.accounts_of_role(Role::Debit).map(Account::name).collect();
        assert_eq!(
            debit,
            vec![
                "Restaurants",
                "Groceries",
                "Work Expenses",
                "Entertainment",
                "Rent",
                "Utilities"
            ]
        );
    }

    #[test]
    fn seeded_book_colours() {
        let book = AccountBook::seeded();
        let rent = book.identifier_by_name("Rent").unwrap();

        assert_eq!(book.get(rent).and_then(Account::colour), Some("#0f12ef"));
        assert_eq!(book.total_balance(), Some(rust_decimal::Decimal::ZERO));
    }

    #[test]
    fn seeded_names_are_unique_per_role() {
        let mut book = AccountBook::new();

        for (name, role, _) in SEED_ACCOUNTS.iter() {
            assert!(book.create_account(*name, *role).is_ok());
        }
    }
}
