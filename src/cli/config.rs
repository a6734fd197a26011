use comfy_table::{Cell, Table};

use splitcat::error::Result;
use splitcat::settings::{load_settings, save_settings, settings_path};

pub fn run(
    sort: Option<String>,
    order: Option<String>,
    dialect: Option<String>,
    export_name: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();
    let changed = sort.is_some() || order.is_some() || dialect.is_some() || export_name.is_some();

    if let Some(s) = sort {
        settings.default_sort = s;
    }
    if let Some(o) = order {
        settings.default_order = o;
    }
    if let Some(d) = dialect {
        settings.dialect = d;
    }
    if let Some(n) = export_name {
        settings.export_file_name = n;
    }
    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }

    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![Cell::new("sort"), Cell::new(&settings.default_sort)]);
    table.add_row(vec![Cell::new("order"), Cell::new(&settings.default_order)]);
    table.add_row(vec![Cell::new("dialect"), Cell::new(&settings.dialect)]);
    table.add_row(vec![Cell::new("export name"), Cell::new(&settings.export_file_name)]);
    println!("{table}");
    Ok(())
}
