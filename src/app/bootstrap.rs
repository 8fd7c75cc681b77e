use log::debug;

use crate::app::commands::{self, resolve_rates};
use crate::app::controller::AppController;
use crate::cli::{Cli, Commands};
use crate::error::Result;

/// Entry point used by `main`: resolve the rate card, then dispatch.
pub fn run(cli: Cli) -> Result<()> {
    let rates = resolve_rates(cli.rates.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Interactive);
    debug!("Dispatching {command:?} with rates from {}", rates.label);

    match command {
        Commands::Interactive => AppController::new(rates).run(),
        Commands::Estimate {
            category,
            complexity,
            technologies,
            json,
        } => {
            let report = commands::estimate_report(
                &rates.card,
                category.as_deref(),
                &complexity,
                &technologies,
                json,
            )?;
            println!("{report}");
            Ok(())
        }
        Commands::Catalog { section } => {
            print!("{}", commands::catalog_report(section));
            Ok(())
        }
        Commands::Rates { json } => {
            println!("{}", commands::rates_report(&rates, json)?);
            Ok(())
        }
    }
}
