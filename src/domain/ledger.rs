use crate::{
    common::money::Money,
    domain::{expense::Expense, member::Member},
};

/// All members and expenses recorded in one session, in insertion order.
#[derive(Debug, Default)]
pub struct Ledger {
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
}
impl Ledger {
    /// Ceiling on the sum of all expense amounts. Every per-member total and
    /// the mean across members stay below it, well inside `i64`.
    pub const MAX_TOTAL: Money = Money::new(i64::MAX / 4);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of every recorded expense amount.
    pub fn total_amount(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn contains_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn member_mut(&mut self, name: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.name == name)
    }
}
