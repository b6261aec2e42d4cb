use crate::{
    common::error::AppError,
    domain::{ledger::Ledger, member::Member},
};

pub fn handle(ledger: &mut Ledger, name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() {
        tracing::debug!("ignoring member with blank name");
        return Ok(());
    }

    // names are the member key, so a second entry would make lookups ambiguous
    if ledger.contains_member(name) {
        tracing::debug!(member = name, "ignoring duplicate member");
        return Ok(());
    }

    ledger.members.push(Member::new(name));
    tracing::debug!(member = name, "member added");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{common::money::Money, domain::ledger::Ledger};

    #[test]
    fn adds_member_with_zero_total() {
        let mut ledger = Ledger::new();

        let _ = handle(&mut ledger, "alice");

        assert_eq!(ledger.members().len(), 1);
        let member = ledger.member("alice").expect("member exists");
        assert_eq!(member.total_spent, Money::zero());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut ledger = Ledger::new();

        let _ = handle(&mut ledger, "  bob ");

        assert!(ledger.contains_member("bob"));
    }

    #[test]
    fn ignores_empty_and_blank_names() {
        let mut ledger = Ledger::new();

        let _ = handle(&mut ledger, "");
        let _ = handle(&mut ledger, "   ");

        assert!(ledger.members().is_empty());
    }

    #[test]
    fn ignores_duplicate_name() {
        let mut ledger = Ledger::new();

        let _ = handle(&mut ledger, "alice");
        let _ = handle(&mut ledger, "alice");
        let _ = handle(&mut ledger, " alice ");

        assert_eq!(ledger.members().len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut ledger = Ledger::new();

        for name in ["carol", "alice", "bob"] {
            let _ = handle(&mut ledger, name);
        }

        let names: Vec<&str> = ledger.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }
}
