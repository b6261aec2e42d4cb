use crate::common::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Unique within a ledger; acts as the member's key.
    pub name: String,
    /// Sum of this member's shares across all recorded expenses.
    pub total_spent: Money,
}
impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_spent: Money::zero(),
        }
    }
}
