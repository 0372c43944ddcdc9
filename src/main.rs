use std::cmp::Ordering;

use clap::{Parser, Subcommand};
use pastver::{registry, Version};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("unknown milestone `{name}` (run `pastver list` for the catalog)")]
    UnknownMilestone { name: String },
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every cataloged milestone in release order
    List,

    /// Show one milestone's rendering, era, and numeric parts
    Show {
        /// The milestone's canonical name, e.g. `v0.8.0` or `v2023-01-30`
        name: String,
    },

    /// Print how two milestones are ordered
    Cmp {
        /// The left-hand milestone name
        a: String,

        /// The right-hand milestone name
        b: String,
    },

    /// Check whether a version is at or past a milestone
    ///
    /// Prints `true` and exits 0 if it is; prints `false` and exits 1
    /// otherwise. Useful from scripts that gate behavior on a release.
    AtLeast {
        /// The name of the version to test
        version: String,

        /// The milestone it should have reached
        milestone: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

fn resolve(name: &str) -> Result<Version, CliError> {
    registry::by_name(name).ok_or_else(|| CliError::UnknownMilestone {
        name: name.to_owned(),
    })
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::List => {
            let lines: Vec<String> = registry::MILESTONES
                .iter()
                .map(|(name, version)| format!("{name:<12} {:<8} {version}", version.era()))
                .collect();
            Ok((lines.join("\n"), 0))
        }
        Commands::Show { name } => {
            let version = resolve(&name)?;
            let parts = version
                .parts()
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Ok((format!("{version} ({} era; parts [{parts}])", version.era()), 0))
        }
        Commands::Cmp { a, b } => {
            let left = resolve(&a)?;
            let right = resolve(&b)?;
            let symbol = match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            Ok((format!("{a} {symbol} {b}"), 0))
        }
        Commands::AtLeast { version, milestone } => {
            let version = resolve(&version)?;
            let milestone = resolve(&milestone)?;
            Ok(if version >= milestone {
                ("true".to_string(), 0)
            } else {
                ("false".to_string(), 1)
            })
        }
    }
}
