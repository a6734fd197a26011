use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;
use crate::exporter::export_csv;
use crate::ledger::Ledger;
use crate::models::{Category, Transaction};
use crate::normalizer::{normalize, normalize_with_categories};
use crate::parser::{parse_rows, Dialect};
use crate::summary::{get_summary, Summary};
use crate::view::{get_view, ViewParams};

/// One user's working state: the ledger plus the CSV dialect used to read and
/// write it. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    dialect: Dialect,
}

/// Invalid UTF-8 sequences become U+FFFD; decoding never fails a load.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        log::warn!("input is not valid UTF-8; invalid bytes replaced with U+FFFD");
    }
    text
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

impl Session {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            ledger: Ledger::new(),
            dialect,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Replace the ledger with the contents of a card export. On error the
    /// previous ledger is kept as it was. Returns the number of transactions
    /// loaded.
    pub fn load_file(&mut self, bytes: &[u8]) -> Result<usize> {
        let text = decode(bytes);
        let rows = parse_rows(strip_bom(&text), self.dialect)?;
        self.install(normalize(&rows))
    }

    /// Replace the ledger with a file previously written by [`Session::export_csv`],
    /// restoring the category column.
    pub fn load_export(&mut self, bytes: &[u8]) -> Result<usize> {
        let text = decode(bytes);
        let rows = parse_rows(strip_bom(&text), self.dialect)?;
        self.install(normalize_with_categories(&rows))
    }

    pub fn load_path(&mut self, path: &Path, resume: bool) -> Result<usize> {
        let bytes = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        if resume {
            self.load_export(&bytes)
        } else {
            self.load_file(&bytes)
        }
    }

    fn install(&mut self, transactions: Vec<Transaction>) -> Result<usize> {
        let count = transactions.len();
        self.ledger.replace(transactions);
        Ok(count)
    }

    pub fn set_category(&mut self, id: usize, category: Category) -> bool {
        self.ledger.set_category(id, category)
    }

    pub fn get_view(&self, params: &ViewParams) -> Vec<&Transaction> {
        get_view(&self.ledger, params)
    }

    pub fn get_summary(&self) -> Summary {
        get_summary(&self.ledger)
    }

    pub fn export_csv(&self) -> Result<String> {
        export_csv(&self.ledger, self.dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitcatError;
    use crate::summary::Bucket;
    use crate::view::{CategoryFilter, SortDirection, SortKey};

    const SAMPLE: &str = "Date,Ref,Payee,Addr,Amount\n01/15/2024,REF1,Chipotle,123 Main St,-15.67\n01/16/2024,REF2,Uber,SF,-32.45";

    fn loaded() -> Session {
        let mut session = Session::default();
        session.load_file(SAMPLE.as_bytes()).unwrap();
        session
    }

    #[test]
    fn test_load_sample() {
        let session = loaded();
        let txns = session.ledger().all();
        assert_eq!(txns.len(), 2);
        assert_eq!((txns[0].id, txns[0].amount), (0, -15.67));
        assert_eq!((txns[1].id, txns[1].amount), (1, -32.45));
        assert!(txns.iter().all(|t| t.category == Category::Uncategorized));
    }

    #[test]
    fn test_summary_after_tagging() {
        let mut session = loaded();
        assert!(session.set_category(0, Category::Splitwise));
        let summary = session.get_summary();
        assert_eq!(summary.splitwise, Bucket { count: 1, total: 15.67 });
        assert_eq!(summary.personal, Bucket { count: 0, total: 0.0 });
        assert_eq!(summary.uncategorized, Bucket { count: 1, total: 32.45 });
    }

    #[test]
    fn test_view_after_tagging() {
        let mut session = loaded();
        session.set_category(0, Category::Splitwise);
        let params = ViewParams {
            filter: CategoryFilter::Only(Category::Uncategorized),
            search: String::new(),
            sort_key: SortKey::Amount,
            direction: SortDirection::Desc,
        };
        let rows = session.get_view(&params);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payee, "Uber");
    }

    #[test]
    fn test_short_row_does_not_fail() {
        let mut session = Session::default();
        let n = session.load_file(b"h\n01/17/2024,REF3,Costco").unwrap();
        assert_eq!(n, 1);
        let t = &session.ledger().all()[0];
        assert_eq!(t.address, "");
        assert_eq!(t.amount, 0.0);
    }

    #[test]
    fn test_failed_load_keeps_previous_ledger() {
        let mut session = loaded();
        session.set_category(1, Category::Personal);
        let err = session
            .load_path(Path::new("/nonexistent/statement.csv"), false)
            .unwrap_err();
        assert!(matches!(err, SplitcatError::Io(_)));
        assert_eq!(session.ledger().len(), 2);
        assert_eq!(session.ledger().get(1).unwrap().category, Category::Personal);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let mut session = Session::default();
        let bytes = b"Date,Ref,Payee,Addr,Amount\n01/15/2024,REF1,Caf\xe9 Roma,Main St,-4.50\n01/16/2024,REF2,Uber,SF,-32.45\n";
        assert_eq!(session.load_file(bytes).unwrap(), 2);
        let txns = session.ledger().all();
        assert_eq!(txns[0].payee, "Caf\u{fffd} Roma");
        assert_eq!(txns[0].amount, -4.5);
        assert_eq!(txns[1].payee, "Uber");
    }

    #[test]
    fn test_reload_discards_categories() {
        let mut session = loaded();
        session.set_category(0, Category::Personal);
        session.load_file(SAMPLE.as_bytes()).unwrap();
        assert_eq!(session.get_summary().uncategorized.count, 2);
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut session = Session::default();
        let text = format!("\u{feff}{SAMPLE}");
        assert_eq!(session.load_file(text.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn test_export_then_resume() {
        let mut session = loaded();
        session.set_category(0, Category::Splitwise);
        session.set_category(1, Category::Personal);
        let text = session.export_csv().unwrap();

        let mut resumed = Session::default();
        resumed.load_export(text.as_bytes()).unwrap();
        assert_eq!(resumed.get_summary(), session.get_summary());
        assert_eq!(resumed.ledger().all(), session.ledger().all());
    }

    #[test]
    fn test_load_path_missing_file() {
        let mut session = Session::default();
        let err = session.load_path(Path::new("/nonexistent/statement.csv"), false).unwrap_err();
        assert!(matches!(err, SplitcatError::Io(_)));
    }
}
