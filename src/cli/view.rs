use colored::Colorize;
use comfy_table::{Cell, Table};

use splitcat::error::Result;
use splitcat::fmt::signed_amount;
use splitcat::settings::load_settings;
use splitcat::view::{CategoryFilter, ViewParams};

use super::summary::summary_table;
use super::{open_session, SourceArgs};

pub fn run(
    source: &SourceArgs,
    filter: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
    order: Option<&str>,
) -> Result<()> {
    let settings = load_settings();
    let session = open_session(source, &settings)?;

    let params = ViewParams {
        filter: filter
            .map(|f| f.parse::<CategoryFilter>())
            .transpose()?
            .unwrap_or_default(),
        search: search.unwrap_or_default().to_string(),
        sort_key: match sort {
            Some(s) => s.parse()?,
            None => settings.sort_key()?,
        },
        direction: match order {
            Some(o) => o.parse()?,
            None => settings.sort_direction()?,
        },
    };
    let rows = session.get_view(&params);

    if rows.is_empty() {
        println!("{}", "No transactions match your current filters.".yellow());
    } else {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Date", "Payee", "Address", "Amount", "Category"]);
        for t in &rows {
            let amount = if t.amount < 0.0 {
                signed_amount(t.amount).red()
            } else {
                signed_amount(t.amount).green()
            };
            table.add_row(vec![
                Cell::new(t.id),
                Cell::new(&t.posted_date),
                Cell::new(&t.payee),
                Cell::new(&t.address),
                Cell::new(amount),
                Cell::new(t.category.label()),
            ]);
        }
        println!("Transactions ({} of {})\n{table}", rows.len(), session.ledger().len());
    }

    println!("\nSummary\n{}", summary_table(&session.get_summary()));
    Ok(())
}
