use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::catalog::Section;

#[derive(Parser, Debug)]
#[command(name = "estimate-cli")]
#[command(about = "Estimate the budget and duration of an IT project")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON rate card to use instead of the built-in prices
    #[arg(long, global = true, env = "ESTIMATE_RATES", value_name = "FILE")]
    pub rates: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive calculator (default)
    Interactive,

    /// Print an estimate for the given inputs
    Estimate {
        /// Project category: web, mobile, ecommerce, enterprise or startup
        #[arg(short, long)]
        category: Option<String>,

        /// Complexity tier: simple, medium, complex or enterprise
        #[arg(short = 'x', long, default_value = "medium")]
        complexity: String,

        /// Technology add-on; repeat or separate with commas
        #[arg(short, long = "tech", value_name = "TAG", value_delimiter = ',')]
        technologies: Vec<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show company services, technologies, case studies or clients
    Catalog {
        /// Only print one section
        #[arg(short, long, value_enum)]
        section: Option<Section>,
    },

    /// Show the active rate card
    Rates {
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Default `env_logger` filter derived from `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["estimate-cli"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn estimate_collects_technologies() {
        let cli = Cli::try_parse_from([
            "estimate-cli",
            "-vv",
            "estimate",
            "--category",
            "startup",
            "-x",
            "simple",
            "--tech",
            "Docker,AWS",
            "-t",
            "Git",
        ])
        .expect("parse");

        assert_eq!(cli.log_filter(), "debug");
        assert_eq!(
            cli.command,
            Some(Commands::Estimate {
                category: Some("startup".to_string()),
                complexity: "simple".to_string(),
                technologies: vec!["Docker".into(), "AWS".into(), "Git".into()],
                json: false,
            })
        );
    }

    #[test]
    fn complexity_defaults_to_medium() {
        let cli = Cli::try_parse_from(["estimate-cli", "estimate"]).expect("parse");
        match cli.command {
            Some(Commands::Estimate { complexity, .. }) => assert_eq!(complexity, "medium"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn catalog_section_uses_short_names() {
        let cli = Cli::try_parse_from(["estimate-cli", "catalog", "--section", "cases"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Commands::Catalog {
                section: Some(Section::CaseStudies)
            })
        );
    }

    #[test]
    fn rates_flag_is_global() {
        let cli = Cli::try_parse_from(["estimate-cli", "rates", "--rates", "custom.json"])
            .expect("parse");
        assert_eq!(cli.rates, Some(PathBuf::from("custom.json")));
    }
}
