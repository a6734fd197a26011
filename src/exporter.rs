use crate::error::{Result, SplitcatError};
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::parser::Dialect;

pub const EXPORT_HEADER: [&str; 6] = [
    "Posted Date",
    "Reference Number",
    "Payee",
    "Address",
    "Amount",
    "Category",
];

/// Shortest decimal form: `-15.67`, `5`, `0`.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    format!("{amount}")
}

fn naive_line(t: &Transaction) -> String {
    format!(
        "{},{},\"{}\",\"{}\",{},{}",
        t.posted_date,
        t.reference_number,
        t.payee,
        t.address,
        format_amount(t.amount),
        t.category
    )
}

/// Serialize the whole ledger in load order, whatever the current view shows.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn export_csv(ledger: &Ledger, dialect: Dialect) -> Result<String> {
    let out = match dialect {
        Dialect::Naive => {
            let mut lines = Vec::with_capacity(ledger.len() + 1);
            lines.push(EXPORT_HEADER.join(","));
            lines.extend(ledger.all().iter().map(naive_line));
            lines.join("\n")
        }
        Dialect::Quoted => export_quoted(ledger)?,
    };
    log::debug!("exported {} transactions ({} dialect)", ledger.len(), dialect.as_str());
    Ok(out)
}

fn export_quoted(ledger: &Ledger) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADER)?;
    for t in ledger.all() {
        wtr.write_record([
            t.posted_date.as_str(),
            t.reference_number.as_str(),
            t.payee.as_str(),
            t.address.as_str(),
            format_amount(t.amount).as_str(),
            t.category.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| SplitcatError::Io(e.into_error()))?;
    let text = String::from_utf8(bytes).map_err(|_| SplitcatError::NotUtf8)?;
    Ok(text.trim_end_matches('\n').to_string())
}
