mod cli;
mod daterange;
mod db;
mod error;
mod fmt;
mod models;
mod reports;
mod settings;
mod store;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            amount,
            category,
            description,
            date,
        } => cli::add::run(&amount, &category, description, date),
        Commands::Edit {
            id,
            date,
            category,
            amount,
            desc,
        } => cli::edit::run(id, &date, &category, &amount, desc),
        Commands::Delete { ids } => cli::delete::run(&ids),
        Commands::List { month, date } => cli::list::run(month, date),
        Commands::Chart { command } => cli::chart::dispatch(command),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
