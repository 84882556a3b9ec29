//! Resolving configuration and running the search.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use backtrack_config::{ConfigError, EnvironmentMode, SearchConfig};
use backtrack_core::{BacktrackError, CountingSink};
use backtrack_password::{PasswordRules, PasswordSpace};
use backtrack_solver::termination::{self, ExternalTermination, OrTermination};
use backtrack_solver::{SearchOutcome, Solver};
use thiserror::Error;
use tracing::debug;

use crate::args::Args;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "backtrack.toml";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read rules {}: {source}", .path.display())]
    RulesIo { path: PathBuf, source: io::Error },

    #[error("invalid rules {}: {source}", .path.display())]
    RulesToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Search(#[from] BacktrackError),

    #[error("cannot write solutions: {0}")]
    Output(#[from] io::Error),
}

/// Loads the search configuration and applies command-line overrides.
///
/// An explicit `--config` must exist; the default file may be absent.
pub fn resolve_config(args: &Args) -> Result<SearchConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => load_default(Path::new(DEFAULT_CONFIG))?,
    };

    if let Some(engine) = args.engine {
        config = config.with_exploration_type(engine.into());
    }
    if let Some(limit) = args.limit {
        config = config.with_solution_count_limit(limit);
    }
    if args.full_assert {
        config = config.with_environment_mode(EnvironmentMode::FullAssert);
    }
    Ok(config)
}

fn load_default(path: &Path) -> Result<SearchConfig, ConfigError> {
    match SearchConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!(event = "config_default", path = %path.display());
            Ok(SearchConfig::default())
        }
        Err(err) => Err(err),
    }
}

/// Loads the password rules and applies command-line overrides.
pub fn resolve_rules(args: &Args) -> Result<PasswordRules, CliError> {
    let mut rules: PasswordRules = match &args.rules {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|source| CliError::RulesIo {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&contents).map_err(|source| CliError::RulesToml {
                path: path.clone(),
                source,
            })?
        }
        None => PasswordRules::reference(),
    };

    if let Some(alphabet) = &args.alphabet {
        rules = rules.with_alphabet(alphabet.clone());
    }
    if let Some(min_len) = args.min_len {
        rules = rules.with_min_len(min_len);
    }
    if let Some(max_len) = args.max_len {
        rules = rules.with_max_len(max_len);
    }
    Ok(rules)
}

/// Runs the search, writing solutions (or their count) to `out`.
///
/// A failed write stops the search at the next candidate and is reported
/// as [`CliError::Output`].
pub fn search<W: Write>(args: &Args, out: &mut W) -> Result<SearchOutcome, CliError> {
    let config = resolve_config(args)?;
    let space = PasswordSpace::new(resolve_rules(args)?)?;

    let stop = AtomicBool::new(false);
    let solver = Solver::new(space)
        .with_exploration_type(config.exploration_type)
        .with_environment_mode(config.environment_mode)
        .with_termination(OrTermination((
            termination::from_config(config.termination.as_ref()),
            ExternalTermination::new(&stop),
        )));

    if args.count {
        let mut sink = CountingSink::new();
        let outcome = solver.solve(String::new(), &mut sink)?;
        writeln!(out, "{}", sink.count())?;
        return Ok(outcome);
    }

    let mut write_error = None;
    let outcome = solver.solve(String::new(), &mut |candidate: String| {
        if write_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(out, "{candidate}") {
            write_error = Some(err);
            stop.store(true, Ordering::Relaxed);
        }
    })?;
    if let Some(err) = write_error {
        return Err(err.into());
    }
    out.flush()?;
    Ok(outcome)
}
