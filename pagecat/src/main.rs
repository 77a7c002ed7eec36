//! The `pagecat` binary
use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use pagecat::error::Error;
use pagecat::runner::envs;

/// The main function of the `pagecat` binary
///
/// We initialize the logging interface and configure the usage of colors as early as possible
/// here. Then we call the main [`pagecat::runner::run`] library function catching and printing
/// [`pagecat::error::Error`]s. Errors are written to stderr regardless of the log level and every
/// error exits with code `1`.
fn main() {
    // Configure the colored crate to respect PAGECAT_COLOR
    if let Ok(var) = std::env::var(envs::PAGECAT_COLOR) {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::PAGECAT_LOG, "warn")
            .write_style(envs::PAGECAT_COLOR),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    if let Err(error) = pagecat::runner::run() {
        // The usage is already rendered by clap
        if let Some(Error::UsageError(usage)) = error.downcast_ref::<Error>() {
            eprint!("{usage}");
        } else {
            eprintln!("pagecat: {:<5}: {error}", "Error".red().bold());
        }
        std::process::exit(1)
    }
}
