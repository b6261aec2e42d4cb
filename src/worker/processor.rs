use crate::{
    common::{error::AppError, event::LedgerEvent},
    domain::{
        balance::{self, BalancePolicy, BalanceReport},
        ledger::Ledger,
    },
    worker::handlers::{add_expense, add_member},
};

/// Applies ledger actions under one balance policy. The policy is fixed for
/// the life of the processor since it also decides whether expenses need a
/// payer.
#[derive(Debug, Default)]
pub struct Processor {
    policy: BalancePolicy,
}
impl Processor {
    pub fn new(policy: BalancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    pub fn process(&self, ledger: &mut Ledger, event: LedgerEvent) -> Result<(), AppError> {
        match event {
            LedgerEvent::AddMember { name } => {
                add_member::handle(ledger, &name)?;
            }
            LedgerEvent::AddExpense {
                amount,
                participants,
                payer,
            } => {
                add_expense::handle(
                    ledger,
                    amount,
                    &participants,
                    payer.as_deref(),
                    self.policy.requires_payer(),
                )?;
            }
        }
        Ok(())
    }

    pub fn balances(&self, ledger: &Ledger) -> BalanceReport {
        balance::compute(ledger, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::common::money::Money;

    fn member(name: &str) -> LedgerEvent {
        LedgerEvent::AddMember { name: name.into() }
    }

    fn expense(amount: &str, participants: &[&str], payer: Option<&str>) -> LedgerEvent {
        LedgerEvent::AddExpense {
            amount: Money::from_str(amount).unwrap(),
            participants: participants.iter().map(|s| s.to_string()).collect(),
            payer: payer.map(str::to_string),
        }
    }

    #[test]
    fn default_policy_is_split_and_paid() {
        assert_eq!(Processor::default().policy(), BalancePolicy::SplitAndPaid);
    }

    #[test]
    fn split_and_paid_rejects_expense_without_payer() {
        let mut ledger = Ledger::new();
        let processor = Processor::new(BalancePolicy::SplitAndPaid);

        processor.process(&mut ledger, member("a")).unwrap();
        processor
            .process(&mut ledger, expense("10", &["a"], None))
            .unwrap();

        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn accumulated_accepts_expense_without_payer() {
        let mut ledger = Ledger::new();
        let processor = Processor::new(BalancePolicy::Accumulated);

        processor.process(&mut ledger, member("a")).unwrap();
        processor
            .process(&mut ledger, expense("10", &["a"], None))
            .unwrap();

        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(
            processor.balances(&ledger),
            BalanceReport::Net(vec![balance::BalanceRow {
                member: "a".into(),
                balance: Money::from_str("10").unwrap(),
            }])
        );
    }

    fn net_balances(policy: BalancePolicy, events: Vec<LedgerEvent>) -> Vec<String> {
        let mut ledger = Ledger::new();
        let processor = Processor::new(policy);
        for event in events {
            processor.process(&mut ledger, event).unwrap();
        }

        let BalanceReport::Net(rows) = processor.balances(&ledger) else {
            panic!("expected net report");
        };
        rows.iter()
            .map(|r| format!("{}={}", r.member, r.balance.to_string_2dp()))
            .collect()
    }

    fn late_joiner_events() -> Vec<LedgerEvent> {
        vec![
            member("a"),
            expense("100", &["a", "b"], None),
            member("b"),
        ]
    }

    #[test]
    fn late_joiner_is_not_credited_for_earlier_expense() {
        assert_eq!(
            net_balances(BalancePolicy::Accumulated, late_joiner_events()),
            vec!["a=50.00", "b=0.00"]
        );
    }

    #[test]
    fn mean_deviation_recenters_accumulated_totals() {
        assert_eq!(
            net_balances(BalancePolicy::MeanDeviation, late_joiner_events()),
            vec!["a=25.00", "b=-25.00"]
        );
    }

    #[test]
    fn oversized_expenses_are_ignored_under_every_policy() {
        for policy in [
            BalancePolicy::SplitAndPaid,
            BalancePolicy::Accumulated,
            BalancePolicy::MeanDeviation,
        ] {
            let mut ledger = Ledger::new();
            let processor = Processor::new(policy);
            for event in [
                member("a"),
                member("b"),
                expense("900000000000000", &["a", "b"], Some("a")),
                expense("900000000000000", &["a", "b"], Some("a")),
                expense("10", &["a", "b"], Some("a")),
            ] {
                processor.process(&mut ledger, event).unwrap();
            }

            assert_eq!(ledger.expenses().len(), 1, "{policy:?}");
            assert_eq!(ledger.total_amount(), Money::from_str("10").unwrap());
            let _ = processor.balances(&ledger);
        }
    }

    #[test]
    fn mean_deviation_balances_after_events() {
        let mut ledger = Ledger::new();
        let processor = Processor::new(BalancePolicy::MeanDeviation);

        for event in [
            member("a"),
            member("b"),
            expense("100", &["a"], None),
            expense("20", &["a", "b"], None),
        ] {
            processor.process(&mut ledger, event).unwrap();
        }

        let BalanceReport::Net(rows) = processor.balances(&ledger) else {
            panic!("expected net report");
        };
        let balances: Vec<String> = rows.iter().map(|r| r.balance.to_string_2dp()).collect();
        assert_eq!(balances, vec!["50.00", "-50.00"]);
    }
}
