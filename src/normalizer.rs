use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Category, Transaction};
use crate::parser::RawRow;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn amount_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("amount pattern is valid")
    })
}

/// Lenient amount parse: reads the longest leading decimal number and ignores
/// whatever follows it ("12.50 USD" is 12.5). Anything without a leading
/// number is 0.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim();
    let parsed = amount_prefix()
        .find(s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite());
    match parsed {
        Some(v) => v,
        None => {
            if !s.is_empty() {
                log::warn!("unparsable amount {s:?}, using 0");
            }
            0.0
        }
    }
}

fn field(row: &RawRow, idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

fn to_transaction(id: usize, row: &RawRow, category: Category) -> Transaction {
    Transaction {
        id,
        posted_date: field(row, 0),
        reference_number: field(row, 1),
        payee: field(row, 2),
        address: field(row, 3),
        amount: row.get(4).map(|v| parse_amount(v)).unwrap_or(0.0),
        category,
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn parsed rows into transactions numbered from 0 in row order. Every
/// transaction starts uncategorized; columns past the fifth are ignored.
pub fn normalize(rows: &[RawRow]) -> Vec<Transaction> {
    rows.iter()
        .enumerate()
        .map(|(id, row)| to_transaction(id, row, Category::Uncategorized))
        .collect()
}

/// Like [`normalize`], but reads a sixth column as the category token written
/// by the exporter. Missing or unrecognised tokens fall back to uncategorized.
pub fn normalize_with_categories(rows: &[RawRow]) -> Vec<Transaction> {
    rows.iter()
        .enumerate()
        .map(|(id, row)| {
            let category = row
                .get(5)
                .and_then(|token| token.parse::<Category>().ok())
                .unwrap_or_default();
            to_transaction(id, row, category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> RawRow {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("-15.67"), -15.67);
        assert_eq!(parse_amount("  42 "), 42.0);
        assert_eq!(parse_amount("+3.5"), 3.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("12.50 USD"), 12.5);
    }

    #[test]
    fn test_parse_amount_falls_back_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("$5.00"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn test_normalize_assigns_sequential_ids() {
        let rows = vec![
            row(&["01/15/2024", "REF1", "Chipotle", "123 Main St", "-15.67"]),
            row(&["01/16/2024", "REF2", "Uber", "SF", "-32.45"]),
        ];
        let txns = normalize(&rows);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].id, 0);
        assert_eq!(txns[1].id, 1);
        assert_eq!(txns[0].payee, "Chipotle");
        assert_eq!(txns[1].amount, -32.45);
        assert!(txns.iter().all(|t| t.category == Category::Uncategorized));
    }

    #[test]
    fn test_short_row_normalizes_to_defaults() {
        let txns = normalize(&[row(&["01/17/2024", "REF3", "Costco"])]);
        assert_eq!(txns[0].payee, "Costco");
        assert_eq!(txns[0].address, "");
        assert_eq!(txns[0].amount, 0.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let txns = normalize(&[row(&["d", "r", "p", "a", "1", "personal", "x"])]);
        assert_eq!(txns[0].category, Category::Uncategorized);
        assert_eq!(txns[0].amount, 1.0);
    }

    #[test]
    fn test_normalize_with_categories_reads_sixth_column() {
        let rows = vec![
            row(&["d", "r", "p", "a", "1", "personal"]),
            row(&["d", "r", "p", "a", "2", "SPLITWISE"]),
            row(&["d", "r", "p", "a", "3", "bogus"]),
            row(&["d", "r", "p"]),
        ];
        let cats: Vec<Category> = normalize_with_categories(&rows).iter().map(|t| t.category).collect();
        assert_eq!(
            cats,
            vec![Category::Personal, Category::Splitwise, Category::Uncategorized, Category::Uncategorized]
        );
    }
}
