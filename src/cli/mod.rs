// CLI module for quas-utils
// Author: kelexine (https://github.com/kelexine)

use clap::{Parser, Subcommand};

/// quas-utils - slugs, key normalization and date helpers from the shell
#[derive(Parser, Debug)]
#[command(name = "quas-utils", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn text into a URL slug
    Slugify { text: String },

    /// Convert a camelCase or PascalCase name to snake_case
    Snake { name: String },

    /// Read JSON from stdin and print it with snake_case keys
    Normalize {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print a YYYY-MM-DD date as e.g. "3rd March"
    ReadableDate { date: String },

    /// Shift a naive datetime forward by one hour (fixed GMT+1)
    Gmt1 {
        datetime: String,

        /// strftime pattern used for parsing and printing
        #[arg(long, default_value = "%Y-%m-%d %H:%M:%S")]
        format: String,
    },

    /// Print whether a value reads as true
    ParseBool { value: String },

    /// Print the effective configuration as TOML
    ShowConfig,
}
