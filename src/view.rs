use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::SplitcatError;
use crate::ledger::Ledger;
use crate::models::{Category, Transaction};

// ---------------------------------------------------------------------------
// View parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn accepts(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Only(cat) => txn.category == *cat,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = SplitcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| SplitcatError::UnknownFilter(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Payee,
    Reference,
    Address,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Payee => "payee",
            Self::Reference => "reference",
            Self::Address => "address",
        }
    }
}

impl FromStr for SortKey {
    type Err = SplitcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "payee" => Ok(Self::Payee),
            "reference" | "referencenumber" => Ok(Self::Reference),
            "address" => Ok(Self::Address),
            _ => Err(SplitcatError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SplitcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(SplitcatError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Everything that shapes the displayed list. Defaults to all transactions,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a posted date, with or without a time of day. A bare date sorts as
/// midnight. RFC 3339 stamps keep their own wall-clock time.
pub fn parse_posted_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// Unparsable dates go after every valid date whichever way the list is
/// sorted.
pub fn compare_dates(a: &Transaction, b: &Transaction, direction: SortDirection) -> Ordering {
    match (parse_posted_date(&a.posted_date), parse_posted_date(&b.posted_date)) {
        (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sign is ignored: a refund and a charge of the same size tie.
pub fn compare_amounts(a: &Transaction, b: &Transaction) -> Ordering {
    a.amount.abs().total_cmp(&b.amount.abs())
}

pub fn compare_payees(a: &Transaction, b: &Transaction) -> Ordering {
    a.payee.to_lowercase().cmp(&b.payee.to_lowercase())
}

fn compare(key: SortKey, direction: SortDirection, a: &Transaction, b: &Transaction) -> Ordering {
    let ascending = match key {
        SortKey::Date => return compare_dates(a, b, direction),
        SortKey::Amount => compare_amounts(a, b),
        SortKey::Payee => compare_payees(a, b),
        SortKey::Reference => a.reference_number.cmp(&b.reference_number),
        SortKey::Address => a.address.cmp(&b.address),
    };
    direction.apply(ascending)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

fn matches_search(txn: &Transaction, needle: &str) -> bool {
    txn.payee.to_lowercase().contains(needle) || txn.address.to_lowercase().contains(needle)
}

/// Filter, search and sort the ledger for display. The ledger itself is
/// never reordered.
pub fn get_view<'a>(ledger: &'a Ledger, params: &ViewParams) -> Vec<&'a Transaction> {
    let needle = params.search.to_lowercase();
    let mut rows: Vec<&Transaction> = ledger
        .all()
        .iter()
        .filter(|t| params.filter.accepts(t))
        .filter(|t| needle.is_empty() || matches_search(t, &needle))
        .collect();
    rows.sort_by(|a, b| compare(params.sort_key, params.direction, a, b));
    log::debug!(
        "view: {} of {} rows (filter {:?}, sort {} {})",
        rows.len(),
        ledger.len(),
        params.filter,
        params.sort_key.as_str(),
        params.direction.as_str()
    );
    rows
}
