use std::path::Path;

use colored::Colorize;
use dialoguer::Select;

use splitcat::error::Result;
use splitcat::fmt::money;
use splitcat::models::Category;
use splitcat::settings::load_settings;
use splitcat::view::{CategoryFilter, ViewParams};

use super::export::write_export;
use super::summary::summary_table;
use super::{open_session, SourceArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Tag(Category),
    Skip,
    Done,
}

const CHOICES: [(&str, Choice); 4] = [
    ("Splitwise", Choice::Tag(Category::Splitwise)),
    ("Personal", Choice::Tag(Category::Personal)),
    ("Skip", Choice::Skip),
    ("Done", Choice::Done),
];

fn choice_at(idx: usize) -> Choice {
    CHOICES.get(idx).map(|(_, c)| *c).unwrap_or(Choice::Skip)
}

pub fn run(source: &SourceArgs, output: Option<&Path>) -> Result<()> {
    let settings = load_settings();
    let mut session = open_session(source, &settings)?;

    let params = ViewParams {
        filter: CategoryFilter::Only(Category::Uncategorized),
        search: String::new(),
        sort_key: settings.sort_key()?,
        direction: settings.sort_direction()?,
    };
    let pending: Vec<usize> = session.get_view(&params).iter().map(|t| t.id).collect();

    if pending.is_empty() {
        println!("{}", "Nothing left to categorize.".green());
    } else {
        println!("\n{} transactions to categorize\n", pending.len());
    }

    let labels: Vec<&str> = CHOICES.iter().map(|(label, _)| *label).collect();
    for id in pending {
        let Some(txn) = session.ledger().get(id) else { continue };
        println!("{}", "\u{2500}".repeat(60));
        println!("  Date:    {}", txn.posted_date);
        println!("  Payee:   {}", txn.payee);
        println!("  Address: {}", txn.address);
        let amt_str = if txn.amount < 0.0 {
            money(txn.amount.abs()).red().to_string()
        } else {
            money(txn.amount.abs()).green().to_string()
        };
        println!("  Amount:  {amt_str}");
        println!();

        // A closed or missing terminal aborts before anything is written.
        let idx = Select::new()
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;

        match choice_at(idx) {
            Choice::Tag(category) => {
                session.set_category(id, category);
            }
            Choice::Skip => continue,
            Choice::Done => break,
        }
    }

    println!("\nSummary\n{}", summary_table(&session.get_summary()));
    write_export(&session, output, &settings)?;
    Ok(())
}
