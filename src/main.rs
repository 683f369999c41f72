use clap::Parser;
use tdd_katas::core::word_count::sorted_by_count;
use tdd_katas::utils::{logger, validation::Validate};
use tdd_katas::{
    decode_ternary, is_leap_year, tally, CliConfig, CoffeeMachine, Command, Extras, KataConfig,
    RecordingIngredients, Result, WeatherClient,
};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Kata failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn load_config(cli: &CliConfig) -> Result<KataConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            KataConfig::from_file(path)?
        }
        None => KataConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Command::Words { phrase, separator } => {
            let separator = match separator {
                Some(separator) => *separator,
                None => config.separator()?,
            };
            let words = tally(phrase, separator);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                for (word, count) in sorted_by_count(&words) {
                    println!("{}: {}", word, count);
                }
            }
        }
        Command::LeapYear { year } => {
            let leap = is_leap_year(*year);
            if cli.json {
                println!("{}", serde_json::json!({ "year": year, "leap": leap }));
            } else if leap {
                println!("{} is a leap year", year);
            } else {
                println!("{} is not a leap year", year);
            }
        }
        Command::Ternary { digits } => {
            let value = decode_ternary(digits);
            if cli.json {
                println!("{}", serde_json::json!({ "ternary": digits, "decimal": value }));
            } else {
                println!("{}", value);
            }
        }
        Command::Weather { date } => {
            let date = tdd_katas::core::weather::parse_date(date)?;
            let client = WeatherClient::new(config.weather_server());
            let report = client.daily_report(date)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🌤  Weather for {}", report.date);
                println!("  min temperature:        {} °C", report.minimum_temperature);
                println!("  max temperature:        {} °C", report.maximum_temperature);
                println!("  average temperature:    {:.2} °C", report.average_temperature);
                println!("  average wind direction: {:.2}°", report.average_wind_direction);
                println!("  max wind speed:         {:.1} m/s", report.maximum_wind_speed);
            }
        }
        Command::Coffee {
            drink,
            size,
            sugar,
            cream,
        } => {
            let mut machine = CoffeeMachine::new(RecordingIngredients::new());
            let extras = Extras {
                sugar: *sugar,
                cream: *cream,
            };
            machine.prepare_with_extras(*drink, *size, extras);
            let calls = machine.into_ingredients().take_calls();
            if cli.json {
                let steps: Vec<String> = calls.iter().map(ToString::to_string).collect();
                println!(
                    "{}",
                    serde_json::json!({ "drink": drink, "size": size.name(), "steps": steps })
                );
            } else {
                println!("☕ {} ({})", drink, size);
                for call in calls {
                    println!("  - {}", call);
                }
            }
        }
    }

    Ok(())
}

