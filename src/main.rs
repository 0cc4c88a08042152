use clap::Parser;
use lunkalendaro::{CliConfig, Date, LunarCalendar, OutputFormat, logger, render};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "parsed command line");

    let today = config.today.unwrap_or_else(Date::today);
    let date = config.date.unwrap_or(today);

    let view = match LunarCalendar::chinese().lunar_calendar_at(date, today) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!(error = %e, "error generating lunar calendar");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match config.format {
        OutputFormat::Text => print!("{}", render::MonthView(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
