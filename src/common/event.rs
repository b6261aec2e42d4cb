use crate::common::money::Money;

/// A ledger action sent from the reader to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    AddMember {
        name: String,
    },
    AddExpense {
        amount: Money,
        participants: Vec<String>,
        payer: Option<String>,
    },
}
