//! A scripted user for demos and tests.
//!
//! The script plays a queue of form submissions against a ledger, one after another.
//! Each step names a preset (an account in the seeded chart, along with its role) and
//! an amount.

use crate::{Ledger, LedgerError, Role, TransactionId};
use log::debug;
use rust_decimal::Decimal;
use std::{collections::VecDeque, fmt, str::FromStr};

/// Shorthand for the seeded accounts. `C*` presets are credits, `D*` presets are debits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    C1,
    C2,
    C3,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
}

impl Preset {
    pub fn role(&self) -> Role {
        match self {
            Preset::C1 | Preset::C2 | Preset::C3 => Role::Credit,
            _ => Role::Debit,
        }
    }

    pub fn account_name(&self) -> &'static str {
        match self {
            Preset::C1 => "Paycheques",
            Preset::C2 => "Freelance",
            Preset::C3 => "Lottery",
            Preset::D1 => "Groceries",
            Preset::D2 => "Restaurants",
            Preset::D3 => "Work Expenses",
            Preset::D4 => "Entertainment",
            Preset::D5 => "Rent",
            Preset::D6 => "Utilities",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:?}", self);
        write!(f, "{}", s.to_lowercase())
    }
}

impl FromStr for Preset {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c1" => Ok(Preset::C1),
            "c2" => Ok(Preset::C2),
            "c3" => Ok(Preset::C3),
            "d1" => Ok(Preset::D1),
            "d2" => Ok(Preset::D2),
            "d3" => Ok(Preset::D3),
            "d4" => Ok(Preset::D4),
            "d5" => Ok(Preset::D5),
            "d6" => Ok(Preset::D6),
            _ => Err(LedgerError::InvalidArgument(format!(
                "'{}' is not a script preset",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub preset: Preset,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// A queue of form submissions, applied in order
#[derive(Debug, Default, Clone)]
pub struct ScriptedUser {
    queue: VecDeque<ScriptStep>,
}

impl ScriptedUser {
    pub fn new() -> Self {
        ScriptedUser::default()
    }

    /// Three paycheques followed by a grocery run
    pub fn demo() -> Self {
        let mut user = ScriptedUser::new();
        user.enqueue(Preset::C1, Decimal::new(1000, 0), None)
            .enqueue(Preset::C2, Decimal::new(2000, 0), None)
            .enqueue(Preset::C3, Decimal::new(5000, 0), None)
            .enqueue(Preset::D1, Decimal::new(10055, 2), None);
        user
    }

    pub fn enqueue(
        &mut self,
        preset: Preset,
        amount: Decimal,
        description: Option<&str>,
    ) -> &mut Self {
        self.queue.push_back(ScriptStep {
            preset,
            amount,
            description: description.map(String::from),
        });
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Fill in and submit the next queued step. Returns `None` once the script is done.
    pub fn step(&mut self, ledger: &mut Ledger) -> Option<Result<TransactionId, LedgerError>> {
        let step = self.queue.pop_front()?;
        Some(apply(step, ledger))
    }

    /// Submit every remaining step in order, stopping at the first failure
    pub fn play(&mut self, ledger: &mut Ledger) -> Result<Vec<TransactionId>, LedgerError> {
        let mut ids = Vec::with_capacity(self.queue.len());

        while let Some(result) = self.step(ledger) {
            ids.push(result?);
        }

        Ok(ids)
    }
}

fn apply(step: ScriptStep, ledger: &mut Ledger) -> Result<TransactionId, LedgerError> {
    let account = ledger.identifier_by_name(step.preset.account_name())?;

    debug!(
        "scripted user submits {} for {} ({})",
        step.amount,
        step.preset,
        step.preset.account_name()
    );

    let mut draft = ledger.draft();
    draft
        .with_role(ledger.accounts(), step.preset.role())
        .with_account(account)
        .with_amount(step.amount);

    if let Some(description) = step.description {
        draft.with_description(description);
    }

    draft.submit(ledger).map(|(id, _)| id)
}
