use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Table};

use splitcat::error::Result;
use splitcat::fmt::money;
use splitcat::models::Category;
use splitcat::settings::load_settings;
use splitcat::summary::Summary;

use super::{open_session, SourceArgs};

fn bucket_label(category: Category) -> ColoredString {
    match category {
        Category::Splitwise => category.label().blue(),
        Category::Personal => category.label().green(),
        Category::Uncategorized => category.label().yellow(),
    }
}

pub fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Count", "Total"]);
    for category in Category::ALL {
        let bucket = summary.bucket(category);
        table.add_row(vec![
            Cell::new(bucket_label(category)),
            Cell::new(bucket.count),
            Cell::new(money(bucket.total)),
        ]);
    }
    let grand = summary.grand_total();
    table.add_row(vec![
        Cell::new("Total".bold().magenta()),
        Cell::new(grand.count),
        Cell::new(money(grand.total)),
    ]);
    table
}

pub fn run(source: &SourceArgs) -> Result<()> {
    let session = open_session(source, &load_settings())?;
    println!("Summary\n{}", summary_table(&session.get_summary()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_bucket_labels_are_coloured() {
        assert_eq!(bucket_label(Category::Splitwise).fgcolor(), Some(Color::Blue));
        assert_eq!(bucket_label(Category::Personal).fgcolor(), Some(Color::Green));
        assert_eq!(bucket_label(Category::Uncategorized).fgcolor(), Some(Color::Yellow));
        assert_eq!(&*bucket_label(Category::Personal), Category::Personal.label());
    }
}
