//! # CLI Layer
//!
//! The only place that knows about arguments, output streams and exit codes.
//!
//! [`Runner`] is constructed explicitly with everything an invocation needs:
//! a factory for the lookup service and the environment fallback for the
//! user. The factory is only called once arguments are parsed and a user is
//! resolved, so `--help` and the missing-user path never build an HTTP client.
//! Nothing is read from process-wide state once the runner is built, which
//! lets tests drive the whole flow with a stub transport and in-memory writers.

mod args;
mod print;

pub use args::Cli;

use crate::config::Settings;
use crate::error::{GhUserError, Result};
use crate::lookup::UserLookup;
use crate::transport::Transport;
use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

/// Outcome of a run, mapped onto the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::FAILURE,
        }
    }
}

pub struct Runner<F> {
    connect: F,
    env_user: Option<String>,
}

impl<F, T> Runner<F>
where
    F: Fn() -> Result<UserLookup<T>>,
    T: Transport,
{
    pub fn new(connect: F) -> Self {
        Self {
            connect,
            env_user: None,
        }
    }

    /// Value of the user environment variable, used when `--user` is absent.
    pub fn with_env_user(mut self, env_user: Option<String>) -> Self {
        self.env_user = env_user;
        self
    }

    pub fn run<I, A>(&self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> Exit
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        match self.try_run(args, out, err) {
            Ok(exit) => exit,
            Err(e) => {
                error!("failed to write output: {}", e);
                Exit::Failure
            }
        }
    }

    fn try_run<I, A>(&self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<Exit>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => return handle_parse_error(&e, out, err),
        };
        init_logging();

        let settings = match Settings::resolve(cli.user, self.env_user.clone()) {
            Ok(settings) => settings,
            Err(e) => {
                print::print_error(err, &e)?;
                return Ok(Exit::Failure);
            }
        };

        let lookup = match (self.connect)() {
            Ok(lookup) => lookup,
            Err(e) => {
                print::print_error(err, &e)?;
                return Ok(Exit::Failure);
            }
        };

        match lookup.fetch(settings.user()) {
            Ok(profile) => {
                print::print_profile(out, &profile)?;
                Ok(Exit::Success)
            }
            // Reported alongside regular output; the run still counts as handled.
            Err(e @ (GhUserError::Transport(_) | GhUserError::Decode(_))) => {
                print::print_error(out, &e)?;
                Ok(Exit::Success)
            }
            Err(e) => {
                print::print_error(err, &e)?;
                Ok(Exit::Failure)
            }
        }
    }
}

fn handle_parse_error(
    e: &clap::Error,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Exit> {
    match e.kind() {
        ErrorKind::DisplayHelp => {
            print::print_clap(out, e)?;
            Ok(Exit::Success)
        }
        _ => {
            print::print_clap(err, e)?;
            Ok(Exit::Failure)
        }
    }
}

/// Logs go to stderr at warn level unless `RUST_LOG` says otherwise.
fn init_logging() {
    // Already initialised when running more than once in a process.
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}
