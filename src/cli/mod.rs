pub mod add;
pub mod chart;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod init;
pub mod list;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outlay", about = "Personal expense tracker with month and category charts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up outlay: choose a data directory and initialize the database.
    Init {
        /// Path for outlay data (default: ~/Documents/outlay)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record an expense.
    Add {
        /// Amount spent, e.g. 12.50
        amount: String,
        /// Category label, e.g. Food
        category: String,
        /// Free-text description
        description: Option<String>,
        /// Expense date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace every field of an expense.
    Edit {
        /// Expense ID (shown in `outlay list`)
        id: i64,
        /// New date: YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// New category label
        #[arg(long)]
        category: String,
        /// New amount
        #[arg(long)]
        amount: String,
        /// New description (omit to clear)
        #[arg(long)]
        desc: Option<String>,
    },
    /// Delete one or more expenses by ID.
    Delete {
        /// Expense IDs (shown in `outlay list`)
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// List expenses, newest first.
    List {
        /// Show one month only: YYYY-MM
        #[arg(long)]
        month: Option<String>,
        /// Show one day only: YYYY-MM-DD
        #[arg(long, conflicts_with = "month")]
        date: Option<String>,
    },
    /// Visualize spending as a chart.
    Chart {
        #[command(subcommand)]
        command: ChartCommands,
    },
    /// Load sample expenses to explore outlay.
    Demo,
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum ChartCommands {
    /// Total spend per category.
    Categories,
    /// Total spend per month.
    Months,
}
