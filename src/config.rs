use clap::{Parser, ValueEnum};

use crate::date::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Month view for the terminal
    Text,
    /// The full result record as JSON
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "lunkalendaro")]
#[command(about = "Show a Gregorian date in the Chinese lunisolar calendar with its month view")]
pub struct CliConfig {
    /// Date to convert, YYYY-MM-DD (defaults to today)
    pub date: Option<Date>,

    #[arg(long, value_enum, env = "LUNKALENDARO_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Date marked as today in the month view, YYYY-MM-DD
    #[arg(long)]
    pub today: Option<Date>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
