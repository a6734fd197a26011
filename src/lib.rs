//! Tag card transactions as shared (Splitwise) or personal and re-export them.
//!
//! Everything is in memory: a CSV export is parsed into a [`ledger::Ledger`],
//! categories are set by id, and [`view`], [`summary`] and [`exporter`] read
//! the ledger back out. [`session::Session`] bundles those operations for a
//! front end.

pub mod error;
pub mod exporter;
pub mod fmt;
pub mod ledger;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod session;
pub mod settings;
pub mod summary;
pub mod view;
