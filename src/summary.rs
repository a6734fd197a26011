use crate::ledger::Ledger;
use crate::models::Category;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub count: usize,
    /// Sum of absolute amounts.
    pub total: f64,
}

impl Bucket {
    fn add(&mut self, amount: f64) {
        self.count += 1;
        self.total += amount.abs();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub splitwise: Bucket,
    pub personal: Bucket,
    pub uncategorized: Bucket,
}

impl Summary {
    pub fn bucket(&self, category: Category) -> &Bucket {
        match category {
            Category::Splitwise => &self.splitwise,
            Category::Personal => &self.personal,
            Category::Uncategorized => &self.uncategorized,
        }
    }

    /// The "Total" card: every bucket added together.
    pub fn grand_total(&self) -> Bucket {
        Bucket {
            count: self.splitwise.count + self.personal.count + self.uncategorized.count,
            total: self.splitwise.total + self.personal.total + self.uncategorized.total,
        }
    }
}

/// Per-category counts and totals over the whole ledger. Independent of any
/// view filter or search.
pub fn get_summary(ledger: &Ledger) -> Summary {
    let mut summary = Summary::default();
    for txn in ledger.all() {
        let bucket = match txn.category {
            Category::Splitwise => &mut summary.splitwise,
            Category::Personal => &mut summary.personal,
            Category::Uncategorized => &mut summary.uncategorized,
        };
        bucket.add(txn.amount);
    }
    summary
}
