use crate::models::{Category, Transaction};

/// The in-memory set of transactions for one session, kept in load order.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly normalized set, discarding everything held before,
    /// including category assignments.
    pub fn replace(&mut self, transactions: Vec<Transaction>) {
        log::info!(
            "ledger replaced: {} transactions (was {})",
            transactions.len(),
            self.transactions.len()
        );
        self.transactions = transactions;
    }

    /// Returns `false` when no transaction has `id`; the ledger is untouched
    /// in that case.
    pub fn set_category(&mut self, id: usize, category: Category) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(txn) => {
                txn.category = category;
                true
            }
            None => {
                log::warn!("set_category: no transaction with id {id}");
                false
            }
        }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: usize) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
