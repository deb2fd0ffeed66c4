use clap::Parser;
use tracing_subscriber::EnvFilter;
use tripday::application::{ConfigService, LoadItineraryService};
use tripday::cli::{format_day_list, format_days, format_summary, Cli, Commands};
use tripday::domain::TripSummary;
use tripday::error::TripdayError;
use tripday::infrastructure::{Config, ItinerarySource};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by TRIPDAY_LOG (default: warn, or debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TRIPDAY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), TripdayError> {
    match cli.command {
        Commands::Days { source, raw } => {
            let config = Config::load()?;
            let parsed = LoadItineraryService::new(ItinerarySource::parse(&source), raw).execute()?;
            print!("{}", format_day_list(&parsed.days, &config));
            Ok(())
        }
        Commands::Show {
            source,
            day,
            raw,
            plain,
        } => {
            let config = Config::load()?;
            let parsed = LoadItineraryService::new(ItinerarySource::parse(&source), raw).execute()?;
            let plain = plain || config.plain_text;

            let days = match day {
                Some(number) => parsed.days_numbered(&number)?,
                None => parsed.days.iter().collect(),
            };

            if config.show_summary && !raw {
                println!("{}", format_summary(&TripSummary::from_record(&parsed.record)));
            }
            print!("{}", format_days(&days, &config, plain));
            Ok(())
        }
        Commands::Summary { source, raw } => {
            let parsed = LoadItineraryService::new(ItinerarySource::parse(&source), raw).execute()?;
            let summary = TripSummary::from_record(&parsed.record);
            print!("{}", format_summary(&summary));
            println!("Days: {}", parsed.days.len());
            Ok(())
        }
        Commands::Parse {
            source,
            raw,
            compact,
        } => {
            let parsed = LoadItineraryService::new(ItinerarySource::parse(&source), raw).execute()?;
            let json = if compact {
                serde_json::to_string(&parsed)?
            } else {
                serde_json::to_string_pretty(&parsed)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Config::resolve_path()?);

            if list {
                let config = service.list()?;
                println!("date_fallback = {}", config.date_fallback);
                println!("plain_text = {}", config.plain_text);
                println!("show_summary = {}", config.show_summary);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tripday config [--list | <key> [<value>]]");
                println!("Valid keys: date_fallback, plain_text, show_summary");
                Ok(())
            }
        }
    }
}
