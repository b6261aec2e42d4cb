use crate::common::{event::LedgerEvent, money::Money};
use std::{io::Read, str::FromStr};

const PARTICIPANT_SEPARATOR: char = ';';

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Columns a
/// row type does not use may be blank or missing.
struct CsvRow {
    #[serde(rename = "type")]
    action: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    participants: Option<String>,
    #[serde(default)]
    payer: Option<String>,
}

/// Reads ledger actions from a CSV reader.
///
/// Supported headers: `type,name,amount,participants,payer`.
/// `member` rows carry `name`; `expense` rows carry `amount`, a
/// `;`-separated participant list and an optional payer. Blank values are
/// passed through as empty so the ledger can reject them; only unknown types
/// and unparseable amounts are errors, and those carry the 1-based record
/// number.
///
/// # Examples
///
/// ```
/// use split_ledger::io::reader::read_events;
/// use split_ledger::common::event::LedgerEvent;
/// use csv::ReaderBuilder;
///
/// let data = "type,name,amount,participants,payer\n\
/// member,alice,,,\n\
/// expense,,12.50,alice;bob,alice\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(&events[0], Ok(LedgerEvent::AddMember { name }) if name == "alice"));
/// assert!(matches!(&events[1], Ok(LedgerEvent::AddExpense { participants, .. }) if participants.len() == 2));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, res)| parse_row(idx + 1, res.map_err(|e| e.to_string())?))
}

fn parse_row(record: usize, row: CsvRow) -> Result<LedgerEvent, String> {
    let kind = row.action.trim().to_ascii_lowercase();

    match kind.as_str() {
        "member" => {
            // blank names reach the ledger, which ignores them
            Ok(LedgerEvent::AddMember {
                name: non_blank(row.name).unwrap_or_default(),
            })
        }
        "expense" => {
            let amount = match non_blank(row.amount) {
                Some(amt_str) => Money::from_str(&amt_str)
                    .map_err(|e| format!("invalid amount {amt_str:?} at record {record}: {e}"))?,
                None => Money::zero(),
            };
            let participants = row
                .participants
                .as_deref()
                .map(split_participants)
                .unwrap_or_default();

            Ok(LedgerEvent::AddExpense {
                amount,
                participants,
                payer: non_blank(row.payer),
            })
        }
        other => Err(format!("unknown action type: {other} at record {record}")),
    }
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn split_participants(field: &str) -> Vec<String> {
    field
        .split(PARTICIPANT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
