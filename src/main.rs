// quas-utils - Small helpers for web services: datetimes, retry, timing, logging, slugs
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use quas_utils::cli::{Args, Command};
use quas_utils::config::UtilsConfig;
use quas_utils::date_time::{
    checked_gmt_plus_1, format_date_readable, format_datetime, parse_datetime,
};
use quas_utils::misc::{normalize_keys, parse_bool, slugify, to_snake};
use quas_utils::utils::logging;
use std::io::Read;
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = UtilsConfig::load()?;
    logging::init(&config.logging)?;
    debug!("Running quas-utils v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Slugify { text } => println!("{}", slugify(&text)),
        Command::Snake { name } => println!("{}", to_snake(&name)),
        Command::Normalize { pretty } => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            let value: serde_json::Value =
                serde_json::from_str(&input).context("stdin is not valid JSON")?;
            let normalized = normalize_keys(value);
            if pretty {
                println!("{}", serde_json::to_string_pretty(&normalized)?);
            } else {
                println!("{}", normalized);
            }
        }
        Command::ReadableDate { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("expected YYYY-MM-DD, got '{}'", date))?;
            println!("{}", format_date_readable(&date));
        }
        Command::Gmt1 { datetime, format } => {
            let shifted = checked_gmt_plus_1(parse_datetime(&datetime, &format)?)?;
            println!("{}", format_datetime(&shifted, Some(format.as_str()))?);
        }
        Command::ParseBool { value } => println!("{}", parse_bool(Some(value.as_str()))),
        Command::ShowConfig => print!("{}", config.to_toml()?),
    }

    Ok(())
}
