use clap::{Parser, Subcommand};

use crate::domain::model::{CupSize, DrinkType};

#[derive(Debug, Clone, Parser)]
#[command(name = "katas")]
#[command(about = "Run the TDD katas from the command line")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Path to a TOML kata configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Count the occurrences of each word in a phrase
    Words {
        phrase: String,
        /// Overrides the separator from the config file
        #[arg(short, long)]
        separator: Option<char>,
    },
    /// Report whether a year is a leap year
    LeapYear { year: u32 },
    /// Convert a ternary number to decimal
    Ternary { digits: String },
    /// Daily weather statistics for a date (DD.MM.YYYY)
    Weather { date: String },
    /// Prepare a drink and list the dispensed ingredients
    Coffee {
        drink: DrinkType,
        #[arg(default_value = "little")]
        size: CupSize,
        #[arg(long, default_value_t = 0)]
        sugar: u32,
        #[arg(long, default_value_t = 0)]
        cream: u32,
    },
}
