use crate::{AccountSummary, Transaction, TransactionId};
use rust_decimal::Decimal;
use std::fmt;

/// Receives state changes from a `Ledger`.
///
/// Notifications are only sent once a change is complete: balances are reported after
/// the whole log has been replayed, never for intermediate replay steps.
pub trait LedgerObserver {
    /// An account was created at runtime
    fn account_created(&mut self, _account: &AccountSummary) {}

    /// An account's balance differs from its balance before the last replay
    fn balance_changed(&mut self, _account: &AccountSummary, _previous: Decimal) {}

    /// A transaction was appended and all balances have been redistributed. Sent once
    /// per transaction, after every `balance_changed` for that transaction.
    fn transaction_appended(&mut self, _id: TransactionId, _transaction: &Transaction) {}
}

/// Handle returned by `Ledger::subscribe`, used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Box<dyn LedgerObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn LedgerObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != id);
        self.subscribers.len() != before
    }

    pub(crate) fn notify<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut dyn LedgerObserver),
    {
        for (_, observer) in self.subscribers.iter_mut() {
            f(observer.as_mut());
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
