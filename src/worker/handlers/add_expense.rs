use crate::{
    common::{error::AppError, money::Money},
    domain::{expense::Expense, ledger::Ledger},
};

pub fn handle(
    ledger: &mut Ledger,
    amount: Money,
    participants: &[String],
    payer: Option<&str>,
    require_payer: bool,
) -> Result<(), AppError> {
    if !amount.is_positive() {
        tracing::debug!(%amount, "ignoring expense without a positive amount");
        return Ok(());
    }

    let participants = distinct(participants);
    if participants.is_empty() {
        tracing::debug!(%amount, "ignoring expense without participants");
        return Ok(());
    }

    let payer = payer.map(str::trim).filter(|p| !p.is_empty());
    if require_payer && payer.is_none() {
        tracing::debug!(%amount, "ignoring expense without a payer");
        return Ok(());
    }

    let within_limit = matches!(
        ledger.total_amount().checked_add(amount),
        Some(total) if total <= Ledger::MAX_TOTAL
    );
    if !within_limit {
        tracing::debug!(%amount, "ignoring expense that would exceed the ledger total limit");
        return Ok(());
    }

    let expense = Expense::new(amount, participants, payer.map(str::to_string));
    apply_shares(ledger, &expense);
    tracing::debug!(
        %amount,
        participants = expense.participants.len(),
        "expense recorded"
    );
    ledger.expenses.push(expense);
    Ok(())
}

fn distinct(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if !out.iter().any(|seen| seen == name) {
            out.push(name.to_string());
        }
    }
    out
}

// Participants that are not members still count toward the divisor.
fn apply_shares(ledger: &mut Ledger, expense: &Expense) {
    let share = expense.share();
    for name in &expense.participants {
        match ledger.member_mut(name) {
            Some(member) => member.total_spent += share,
            None => tracing::debug!(participant = %name, "participant is not a member"),
        }
    }
}
