//! CLI host for the fixity checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixity_core::config::{self, FixityConfig};
use fixity_core::sink::TracingSink;
use fixity_core::FixityChecker;
use std::path::Path;
use std::sync::Arc;

use commands::{run_agent, run_check, run_hash};

/// Exit status when a stored digest no longer matches.
pub const EXIT_MISMATCH: i32 = 2;

/// Top-level CLI for the fixity checker.
#[derive(Debug, Parser)]
#[command(name = "fixity")]
#[command(about = "fixity: streamed file digests and fixity verification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the digest of a file and compare it with a stored value.
    Check {
        /// Path to the file.
        path: String,
        /// Previously recorded digest (hex, any case).
        #[arg(long, value_name = "HEX")]
        expected: Option<String>,
        /// Digest algorithm (overrides config), e.g. SHA-512.
        #[arg(long, value_name = "NAME")]
        algorithm: Option<String>,
    },

    /// Compute and print the digest of a file.
    Hash {
        /// Path to the file.
        path: String,
        /// Digest algorithm (overrides config), e.g. SHA-256.
        #[arg(long, value_name = "NAME")]
        algorithm: Option<String>,
    },

    /// Print the algorithm and agent identity of the configured checker.
    Agent,
}

/// Apply a command-line algorithm override and build the checker.
pub(crate) fn build_checker(cfg: &FixityConfig, algorithm: Option<&str>) -> Result<FixityChecker> {
    let mut cfg = cfg.clone();
    if let Some(a) = algorithm {
        cfg.algorithm = a.to_string();
    }
    Ok(FixityChecker::from_config(&cfg, Arc::new(TracingSink))?)
}

impl CliCommand {
    /// Parse args, run the command, and return the process exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let code = match cli.command {
            CliCommand::Check {
                path,
                expected,
                algorithm,
            } => {
                let checker = build_checker(&cfg, algorithm.as_deref())?;
                if run_check(&checker, Path::new(&path), expected.as_deref())? {
                    0
                } else {
                    EXIT_MISMATCH
                }
            }
            CliCommand::Hash { path, algorithm } => {
                let checker = build_checker(&cfg, algorithm.as_deref())?;
                run_hash(&checker, Path::new(&path))?;
                0
            }
            CliCommand::Agent => {
                run_agent(&build_checker(&cfg, None)?);
                0
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
