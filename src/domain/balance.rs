use crate::{
    common::money::Money,
    domain::{expense::Expense, ledger::Ledger, member::Member},
};

/// How per-member balances are derived from the ledger. The three policies
/// are alternatives; none is a refinement of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalancePolicy {
    /// Shares owed and amounts paid side by side, plus the grand total.
    /// Expenses must name a payer.
    #[default]
    SplitAndPaid,
    /// The incrementally accumulated share total.
    Accumulated,
    /// Accumulated share total minus its mean across all members.
    MeanDeviation,
}

impl BalancePolicy {
    pub fn requires_payer(&self) -> bool {
        matches!(self, BalancePolicy::SplitAndPaid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRow {
    pub member: String,
    pub split: Money,
    pub paid: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow {
    pub member: String,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceReport {
    SplitAndPaid {
        rows: Vec<SplitRow>,
        total_paid: Money,
    },
    Net(Vec<BalanceRow>),
}

/// Derives balances for every member, in insertion order.
pub fn compute(ledger: &Ledger, policy: BalancePolicy) -> BalanceReport {
    match policy {
        BalancePolicy::SplitAndPaid => split_and_paid(ledger),
        BalancePolicy::Accumulated => BalanceReport::Net(accumulated(ledger.members())),
        BalancePolicy::MeanDeviation => BalanceReport::Net(mean_deviation(ledger.members())),
    }
}

fn split_and_paid(ledger: &Ledger) -> BalanceReport {
    let rows: Vec<SplitRow> = ledger
        .members()
        .iter()
        .map(|m| SplitRow {
            member: m.name.clone(),
            split: share_total(ledger.expenses(), &m.name),
            paid: ledger
                .expenses()
                .iter()
                .filter(|e| e.is_paid_by(&m.name))
                .map(|e| e.amount)
                .sum(),
        })
        .collect();
    let total_paid = ledger.total_amount();

    BalanceReport::SplitAndPaid { rows, total_paid }
}

fn accumulated(members: &[Member]) -> Vec<BalanceRow> {
    members
        .iter()
        .map(|m| BalanceRow {
            member: m.name.clone(),
            balance: m.total_spent,
        })
        .collect()
}

fn mean_deviation(members: &[Member]) -> Vec<BalanceRow> {
    let totals: Vec<Money> = members.iter().map(|m| m.total_spent).collect();
    let mean = Money::mean(&totals);

    members
        .iter()
        .map(|m| BalanceRow {
            member: m.name.clone(),
            balance: m.total_spent - mean,
        })
        .collect()
}

fn share_total(expenses: &[Expense], name: &str) -> Money {
    expenses
        .iter()
        .filter(|e| e.includes(name))
        .map(Expense::share)
        .sum()
}
