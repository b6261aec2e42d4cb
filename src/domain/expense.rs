use crate::common::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub amount: Money,
    pub participants: Vec<String>,
    pub payer: Option<String>,
}

impl Expense {
    pub fn new(amount: Money, participants: Vec<String>, payer: Option<String>) -> Self {
        Self {
            amount,
            participants,
            payer,
        }
    }

    /// Each participant's equal portion of the amount.
    pub fn share(&self) -> Money {
        self.amount.split(self.participants.len())
    }

    pub fn includes(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    pub fn is_paid_by(&self, name: &str) -> bool {
        self.payer.as_deref() == Some(name)
    }
}
