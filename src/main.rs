mod cli;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View {
            source,
            filter,
            search,
            sort,
            order,
        } => cli::view::run(&source, filter.as_deref(), search.as_deref(), sort.as_deref(), order.as_deref()),
        Commands::Summary { source } => cli::summary::run(&source),
        Commands::Export { source, output } => cli::export::run(&source, output.as_deref()),
        Commands::Categorize { source, output } => cli::categorize::run(&source, output.as_deref()),
        Commands::Config {
            sort,
            order,
            dialect,
            export_name,
        } => cli::config::run(sort, order, dialect, export_name),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
