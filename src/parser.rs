use std::str::FromStr;

use crate::error::{Result, SplitcatError};

/// How raw CSV text is split into fields.
///
/// `Naive` splits every line on commas and drops all double-quote characters,
/// so a quoted field containing a comma is split in two. `Quoted` honours
/// RFC-4180 quoting on both the read and the write side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Naive,
    Quoted,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Quoted => "quoted",
        }
    }
}

impl FromStr for Dialect {
    type Err = SplitcatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "quoted" | "rfc4180" => Ok(Self::Quoted),
            _ => Err(SplitcatError::UnknownDialect(s.to_string())),
        }
    }
}

pub type RawRow = Vec<String>;

/// Split `text` into data rows. The first line is the header and is
/// discarded; blank lines produce nothing.
pub fn parse_rows(text: &str, dialect: Dialect) -> Result<Vec<RawRow>> {
    let rows = match dialect {
        Dialect::Naive => parse_naive(text),
        Dialect::Quoted => parse_quoted(text)?,
    };
    log::debug!("parsed {} data rows ({} dialect)", rows.len(), dialect.as_str());
    Ok(rows)
}

/// Data lines after the header, plus how many blank lines were dropped.
fn data_lines(text: &str) -> (Vec<&str>, usize) {
    let (lines, blank): (Vec<&str>, Vec<&str>) = text
        .split('\n')
        .skip(1)
        .partition(|line| !line.trim().is_empty());
    (lines, blank.len())
}

fn parse_naive(text: &str) -> Vec<RawRow> {
    let (lines, skipped) = data_lines(text);
    if skipped > 0 {
        log::debug!("skipped {skipped} blank lines");
    }
    lines
        .into_iter()
        .map(|line| {
            line.split(',')
                .map(|v| v.trim().replace('"', ""))
                .collect()
        })
        .collect()
}

fn parse_quoted(text: &str) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.is_empty()) {
            skipped += 1;
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    if skipped > 0 {
        log::debug!("skipped {skipped} empty records");
    }
    Ok(rows)
}
